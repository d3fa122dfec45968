use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BarError {
    #[error("Bar not found: {0}")]
    NotFound(i32),

    #[error("Beer not found: {0}")]
    BeerNotFound(i32),

    #[error("No matching records found")]
    NoneFound,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type BarResult<T> = Result<T, BarError>;

/// Convert BarError to AppError for standardized error responses
impl From<BarError> for AppError {
    fn from(err: BarError) -> Self {
        match err {
            BarError::NotFound(id) => AppError::NotFound(format!("Bar {} not found", id)),
            BarError::BeerNotFound(id) => AppError::NotFound(format!("Beer {} not found", id)),
            BarError::NoneFound => {
                AppError::NotFound("No matching records were found.".to_string())
            }
            BarError::Validation(msg) => AppError::BadRequest(msg),
            BarError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for BarError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
