use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BeerError {
    #[error("Beer not found: {0}")]
    NotFound(i32),

    #[error("No beers match the requested criteria")]
    NoneFound,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type BeerResult<T> = Result<T, BeerError>;

/// Convert BeerError to AppError for standardized error responses
impl From<BeerError> for AppError {
    fn from(err: BeerError) -> Self {
        match err {
            BeerError::NotFound(id) => AppError::NotFound(format!("Beer {} not found", id)),
            BeerError::NoneFound => {
                AppError::NotFound("No beers found matching the requested criteria.".to_string())
            }
            BeerError::Validation(msg) => AppError::BadRequest(msg),
            BeerError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for BeerError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
