// src/presentation/http/extractors.rs
use crate::application::error::ApplicationError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::HttpError;

/// Query string extractor whose rejection is an `InvalidParameter` error body
/// instead of axum's plain-text 400.
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

impl<T> FromRequestParts<()> for QueryParams<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &()) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "rejected query string");
                HttpError::from_error(ApplicationError::invalid_parameter(
                    rejection.body_text(),
                ))
            })?;
        Ok(Self(value))
    }
}
