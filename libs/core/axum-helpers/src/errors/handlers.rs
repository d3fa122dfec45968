use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::ErrorResponse;

/// Handler for 404 Not Found errors.
///
/// Used as the router fallback for paths outside the API surface.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse {
        message: "The requested resource was not found.".to_string(),
        status_code: StatusCode::NOT_FOUND.as_u16(),
    });

    (StatusCode::NOT_FOUND, body).into_response()
}
