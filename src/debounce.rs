use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Trailing-edge debounce around a function.
///
/// Every [`call`](Debounced::call) supersedes any pending invocation and
/// schedules a new one to fire `delay` later with that call's arguments. If
/// calls keep arriving within the delay window, only the last one fires; if
/// no call is ever made, the action never fires.
///
/// Scheduling and cancellation use the same primitive pair: a task spawned
/// with `tokio::spawn` is cancelled with `JoinHandle::abort`. The pending
/// slot is mutated under a lock held across abort and respawn, so an old and
/// a new timer can never both fire.
pub struct Debounced<A> {
    action: Arc<dyn Fn(A) + Send + Sync>,
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<A: Send + 'static> Debounced<A> {
    pub fn new<F>(action: F, delay: Duration) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            action: Arc::new(action),
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedule the action with `args`, discarding any invocation that was
    /// scheduled but has not fired yet.
    pub fn call(&self, args: A) {
        let action = Arc::clone(&self.action);
        let delay = self.delay;

        let mut pending = self.pending.lock().expect("debounce timer lock poisoned");
        if let Some(previous) = pending.take() {
            previous.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action(args);
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::task::yield_now;
    use tokio::time::advance;

    fn recording_debounce(delay: Duration) -> (Debounced<u32>, Arc<Mutex<Vec<u32>>>) {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let sink = fired.clone();
        let debounced = Debounced::new(
            move |n: u32| sink.lock().unwrap().push(n),
            delay,
        );
        (debounced, fired)
    }

    // Let pending timer tasks run after time has been advanced.
    async fn settle() {
        for _ in 0..4 {
            yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn burst_of_calls_fires_once_with_last_args() {
        let (debounced, fired) = recording_debounce(Duration::from_millis(50));

        for n in 0..5 {
            debounced.call(n);
            advance(Duration::from_millis(10)).await;
        }
        assert!(fired.lock().unwrap().is_empty());

        advance(Duration::from_millis(60)).await;
        settle().await;

        assert_eq!(*fired.lock().unwrap(), vec![4]);
    }

    #[tokio::test(start_paused = true)]
    async fn never_called_never_fires() {
        let (_debounced, fired) = recording_debounce(Duration::from_millis(50));

        advance(Duration::from_millis(500)).await;
        settle().await;

        assert!(fired.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn single_call_fires_after_delay_with_original_args() {
        let (debounced, fired) = recording_debounce(Duration::from_millis(50));

        debounced.call(7);

        advance(Duration::from_millis(49)).await;
        settle().await;
        assert!(fired.lock().unwrap().is_empty());

        advance(Duration::from_millis(2)).await;
        settle().await;
        assert_eq!(*fired.lock().unwrap(), vec![7]);
    }

    #[tokio::test(start_paused = true)]
    async fn calls_spaced_beyond_delay_each_fire() {
        let (debounced, fired) = recording_debounce(Duration::from_millis(50));

        debounced.call(1);
        advance(Duration::from_millis(60)).await;
        settle().await;

        debounced.call(2);
        advance(Duration::from_millis(60)).await;
        settle().await;

        assert_eq!(*fired.lock().unwrap(), vec![1, 2]);
    }
}
