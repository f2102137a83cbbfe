//! JSON body extractor with the API error shape.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use ibroker_core::error::AppError;

use crate::error::ApiError;

/// A JSON request body.
///
/// Missing content type, invalid syntax and missing or mistyped fields are
/// all answered with a 400 `{code, error, message}` body.
#[derive(Debug, Clone)]
pub struct CatalogJson<T>(pub T);

impl<T, S> FromRequest<S> for CatalogJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;
        Ok(Self(value))
    }
}
