use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// JSON extractor that decodes the raw body regardless of `Content-Type`.
///
/// Only the first JSON value is read; anything after it is ignored. A
/// top-level `null` decodes as `T::default()`. Any failure to read or parse
/// that first value becomes `AppError::MalformedInput`, which renders as
/// `400 {"error": "Invalid JSON"}`.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::MalformedInput(rejection.body_text()))?;

        let first = serde_json::Deserializer::from_slice(&bytes)
            .into_iter::<Option<T>>()
            .next();

        match first {
            Some(Ok(value)) => Ok(Self(value.unwrap_or_default())),
            Some(Err(err)) => Err(AppError::MalformedInput(err.to_string())),
            None => Err(AppError::MalformedInput("empty request body".to_string())),
        }
    }
}
