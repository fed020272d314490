use axum::body::Body;
use axum::extract::Request;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::models::ErrorResponse;
use crate::routes;

/// POST /users handler - Create a user
///
/// Echoes the request body back byte-for-byte. There is no validation and no
/// persistence; the payload never leaves the request/response cycle.
#[utoipa::path(
    post,
    path = routes::USERS,
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Echo of the submitted user", body = serde_json::Value),
        (status = 400, description = "Request body could not be read", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn create_user_handler(req: Request) -> Response {
    let (parts, body) = req.into_parts();

    // The body is buffered whole and echoed without a size cap; capping
    // would turn an oversized payload into a 400 instead of an echo.
    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!("failed to read create-user request body: {}", err);
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("failed to read request body: {}", err),
                }),
            )
                .into_response();
        }
    };

    // Verbatim echo: re-serializing through a JSON value could reorder keys,
    // so the raw bytes go straight back out.
    let mut response = Response::new(Body::from(bytes));
    if let Some(content_type) = parts.headers.get(header::CONTENT_TYPE) {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, content_type.clone());
    }
    response
}
