pub mod handlers;
pub mod responses;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// Every error the API produces serializes to this shape:
///
/// ```json
/// { "message": "Beer 42 not found", "statusCode": 404 }
/// ```
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
    /// HTTP status code, mirrored into the body for client logging
    pub status_code: u16,
}

/// Plain message body for mutating operations that do not return an entity
/// (update, delete, assignment).
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Application error type that converts to HTTP responses.
///
/// Domain error enums convert into this via `From` impls; anything that
/// reaches `into_response` is logged once, at a severity matching its class.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Database(e) => map_db_err(e),
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!("JSON extraction error: {:?}", e);
                (e.status(), e.body_text())
            }
            AppError::ValidationError(e) => {
                tracing::info!("Validation error: {:?}", e);
                (StatusCode::BAD_REQUEST, flatten_validation_errors(&e))
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            }
            AppError::Conflict(msg) => {
                tracing::info!("Conflict: {}", msg);
                (StatusCode::CONFLICT, msg)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred.".to_string(),
                )
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!("Service unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, msg)
            }
        };

        error_response(status, message)
    }
}

/// Maps a SeaORM error to response components.
///
/// Not-found style errors stay client-visible 404s; pool exhaustion maps to
/// 503 so load balancers back off; everything else is an opaque 500 (the
/// underlying error is logged, never leaked to the client).
fn map_db_err(error: DbErr) -> (StatusCode, String) {
    match &error {
        DbErr::RecordNotFound(what) => {
            tracing::info!("Database record not found: {}", what);
            (
                StatusCode::NOT_FOUND,
                "Requested record was not found.".to_string(),
            )
        }
        DbErr::RecordNotUpdated => {
            tracing::info!("Database update affected no rows");
            (
                StatusCode::NOT_FOUND,
                "Requested record was not found.".to_string(),
            )
        }
        DbErr::ConnectionAcquire(e) => {
            tracing::error!("Database connection acquire failed: {:?}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "Database is temporarily unavailable.".to_string(),
            )
        }
        _ => {
            tracing::error!("Database error: {:?}", error);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "A database error occurred.".to_string(),
            )
        }
    }
}

/// Collapse validator's per-field error map into one message line.
fn flatten_validation_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let codes: Vec<&str> = errs.iter().map(|e| e.code.as_ref()).collect();
            format!("{}: {}", field, codes.join(", "))
        })
        .collect();
    parts.sort();

    if parts.is_empty() {
        "Request validation failed.".to_string()
    } else {
        format!("Request validation failed: {}.", parts.join("; "))
    }
}

/// Build a JSON error response with the standard body shape.
pub fn error_response(status: StatusCode, message: String) -> Response {
    let body = Json(ErrorResponse {
        message,
        status_code: status.as_u16(),
    });

    (status, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_shape() {
        let response = ErrorResponse {
            message: "Beer 42 not found".to_string(),
            status_code: 404,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["message"], "Beer 42 not found");
        assert_eq!(json["statusCode"], 404);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("Bar 7 not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_error_is_opaque() {
        let response =
            AppError::InternalServerError("pool exploded at 03:00".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_db_record_not_found_maps_to_404() {
        let err = AppError::Database(DbErr::RecordNotFound("beers".to_string()));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
