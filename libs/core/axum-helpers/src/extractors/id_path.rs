//! Positive-integer id path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for integer id path parameters.
///
/// Ids are store-assigned positive integers; anything that does not parse,
/// or parses to zero or below, is rejected with a 400 before the handler
/// body runs. Rejection is independent of whether the id exists.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_beer(IdPath(id): IdPath) -> String {
///     format!("Beer id: {}", id)
/// }
/// ```
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match raw.parse::<i32>() {
            Ok(id) if id > 0 => Ok(IdPath(id)),
            _ => Err(AppError::BadRequest(format!(
                "Id must be a positive integer, got '{}'.",
                raw
            ))
            .into_response()),
        }
    }
}
