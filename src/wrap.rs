use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use axum::extract::Request;
use axum::http::Method;
use axum::response::Response;
use axum::routing::{on, MethodFilter};
use axum::Router;
use tracing::Level;

/// Boxed response future produced by a [`Handler`].
pub type HandlerFuture = Pin<Box<dyn Future<Output = Response> + Send>>;

/// A request handler as the wrapping pipeline sees it: a shareable function
/// from a full request to a response. Concrete handlers are plain async fns
/// lifted into this shape with [`handler`].
pub type Handler = Arc<dyn Fn(Request) -> HandlerFuture + Send + Sync>;

/// Lift an async fn into a boxed [`Handler`].
pub fn handler<F, Fut>(f: F) -> Handler
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    Arc::new(move |req| Box::pin(f(req)))
}

/// Wrap a handler so that every invocation first emits one log event at
/// `level` carrying the request's method and path, then delegates with the
/// request unmodified. The wrapped handler's response passes through
/// unchanged; so do any failures inside it.
pub fn with_logging(inner: Handler, level: Level) -> Handler {
    Arc::new(move |req: Request| {
        log_dispatch(level, req.method(), req.uri().path());
        inner(req)
    })
}

// tracing macros take the level as a const, so dynamic levels go through
// an explicit dispatch.
fn log_dispatch(level: Level, method: &Method, path: &str) {
    if level == Level::ERROR {
        tracing::error!(%method, path, "dispatching request");
    } else if level == Level::WARN {
        tracing::warn!(%method, path, "dispatching request");
    } else if level == Level::INFO {
        tracing::info!(%method, path, "dispatching request");
    } else if level == Level::DEBUG {
        tracing::debug!(%method, path, "dispatching request");
    } else {
        tracing::trace!(%method, path, "dispatching request");
    }
}

struct RouteEntry {
    method: Method,
    path: &'static str,
    handler: Handler,
}

/// Registration side of the wrapping pipeline. Handlers are recorded against
/// a (method, path) pair at construction time and later wired into the axum
/// router in one pass.
#[derive(Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `handler` under (method, path) and hand it back unchanged.
    /// At most one handler may be registered per (method, path) pair.
    pub fn register(
        &mut self,
        method: Method,
        path: &'static str,
        handler: Handler,
    ) -> Result<Handler> {
        if self
            .entries
            .iter()
            .any(|entry| entry.method == method && entry.path == path)
        {
            bail!("duplicate route registration for {method} {path}");
        }

        tracing::debug!(%method, path, "route registered");
        self.entries.push(RouteEntry {
            method,
            path,
            handler: handler.clone(),
        });

        Ok(handler)
    }

    /// Wire every recorded entry into an axum [`Router`].
    pub fn into_router(self) -> Result<Router> {
        let mut router = Router::new();

        for entry in self.entries {
            let filter = MethodFilter::try_from(entry.method.clone())
                .with_context(|| format!("unroutable method {} for {}", entry.method, entry.path))?;
            let handler = entry.handler;
            router = router.route(
                entry.path,
                on(filter, move |req: Request| {
                    let handler = handler.clone();
                    async move { handler(req).await }
                }),
            );
        }

        Ok(router)
    }
}
