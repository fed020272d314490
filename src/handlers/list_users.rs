use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value as JsonValue;

use crate::routes;

/// GET /users handler - List users
///
/// The skeleton carries no user store yet, so the list is always empty.
#[utoipa::path(
    get,
    path = routes::USERS,
    responses(
        (status = 200, description = "List of users", body = Vec<serde_json::Value>)
    ),
    tag = "users"
)]
pub async fn list_users_handler(_req: Request) -> Response {
    (StatusCode::OK, Json(Vec::<JsonValue>::new())).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[tokio::test]
    async fn test_list_users_returns_empty_list() {
        let req = Request::builder()
            .method("GET")
            .uri("/users")
            .body(Body::empty())
            .unwrap();

        let response = list_users_handler(req).await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let users: Vec<JsonValue> = serde_json::from_slice(&body).unwrap();
        assert!(users.is_empty());
    }
}
