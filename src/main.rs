mod api_doc;
mod app;
mod config;
mod db;
mod debounce;
mod handlers;
mod models;
mod routes;
mod wrap;

use app::Application;
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("user-service starting");

    let config = Config::from_env()?;
    config.log_startup();

    let app = Application::new(config)?;
    app.init().await
}
