//! Typed path parameter helpers.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use ibroker_core::error::AppError;

use crate::error::ApiError;

/// Parses a catalog row id from a path segment.
pub fn parse_id(s: &str) -> Result<i64, AppError> {
    s.parse::<i64>()
        .map_err(|_| AppError::validation(format!("Invalid id: {s}")))
}

/// The `{id}` segment of a catalog route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogId(pub i64);

impl<S> FromRequestParts<S> for CatalogId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;
        Ok(Self(parse_id(&raw)?))
    }
}
