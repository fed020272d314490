use utoipa::OpenApi;

use crate::handlers;
use crate::models::{ErrorResponse, HealthResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "user-service API",
        version = "1.0.0",
        description = "A minimal user HTTP service skeleton"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list_users::list_users_handler,
        handlers::create_user::create_user_handler
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "users", description = "User operations")
    )
)]
pub struct ApiDoc;
