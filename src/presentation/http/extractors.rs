// src/presentation/http/extractors.rs
use crate::application::error::ApplicationError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use super::error::HttpError;

/// Article id taken from the `{id}` path segment. Anything that is not an
/// integer is answered like an unknown article.
#[derive(Debug, Clone, Copy)]
pub struct ArticlePath(pub i64);

impl<S> FromRequestParts<S> for ArticlePath
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let not_found = || HttpError::from_error(ApplicationError::not_found("article not found"));

        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| not_found())?;

        raw.parse::<i64>().map(Self).map_err(|_| not_found())
    }
}
