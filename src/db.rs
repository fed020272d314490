/// Announce database readiness.
///
/// The skeleton carries no persistence layer; this is the one-shot startup
/// routine the application debounces, standing in for real pool setup.
pub fn init_connection() {
    tracing::info!("database connection established");
}
