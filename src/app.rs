use anyhow::{Context, Result};
use axum::http::Method;
use axum::Router;
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::config::Config;
use crate::db;
use crate::debounce::Debounced;
use crate::handlers;
use crate::routes;
use crate::wrap::{handler, with_logging, RouteTable};

/// The assembled application: routing table, wrapped handlers, and the
/// debounced startup routine, built once from an explicit [`Config`].
pub struct Application {
    config: Config,
    router: Router,
    db_init: Debounced<()>,
}

impl Application {
    /// Compose the handler table. Each concrete handler is wrapped with
    /// logging first, then registered; the wrap order is fixed here and
    /// nowhere else.
    pub fn new(config: Config) -> Result<Self> {
        let mut table = RouteTable::new();

        table.register(
            Method::GET,
            routes::USERS,
            with_logging(handler(handlers::list_users_handler), Level::INFO),
        )?;
        table.register(
            Method::POST,
            routes::USERS,
            with_logging(handler(handlers::create_user_handler), Level::WARN),
        )?;
        table.register(
            Method::GET,
            routes::HEALTH,
            with_logging(handler(handlers::health_handler), Level::DEBUG),
        )?;

        let router = table.into_router()?.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );

        let db_init = Debounced::new(|()| db::init_connection(), config.db_init_debounce);

        Ok(Self {
            config,
            router,
            db_init,
        })
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Bind the configured address and serve. The database-initialization
    /// routine is kicked off (debounced) once the listener is ready; a bind
    /// failure is surfaced to the caller and nothing is retried.
    pub async fn init(self) -> Result<()> {
        let addr = format!("{}:{}", self.config.service_host, self.config.service_port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        tracing::info!(
            "listening on {}",
            listener
                .local_addr()
                .context("listener has no local address")?
        );

        self.db_init.call(());

        axum::serve(listener, self.router)
            .await
            .context("server error")?;
        Ok(())
    }
}
