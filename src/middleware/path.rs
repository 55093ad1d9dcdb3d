use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::CatalogError;

/// Integer id from the route, e.g. `/v1/venues/{venue_id}`.
///
/// A non-integer id is a 400 with the usual `{"detail"}` body.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = CatalogError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| CatalogError::InvalidPath(rejection.body_text()))?;

        Ok(IdPath(id))
    }
}
