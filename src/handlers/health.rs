use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::models::HealthResponse;
use crate::routes;

/// GET /health handler - Health check endpoint
///
/// With no downstream dependencies to probe, a reachable process is a
/// healthy process.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(_req: Request) -> Response {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
        .into_response()
}
