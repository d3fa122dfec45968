use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BreweryError {
    #[error("Brewery not found: {0}")]
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

pub type BreweryResult<T> = Result<T, BreweryError>;

/// Convert BreweryError to AppError for standardized error responses
impl From<BreweryError> for AppError {
    fn from(err: BreweryError) -> Self {
        match err {
            BreweryError::NotFound(id) => AppError::NotFound(format!("Brewery {} not found", id)),
            BreweryError::BeerNotFound(id) => AppError::NotFound(format!("Beer {} not found", id)),
            BreweryError::NoneFound => {
                AppError::NotFound("No matching records were found.".to_string())
            }
            BreweryError::Validation(msg) => AppError::BadRequest(msg),
            BreweryError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for BreweryError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
