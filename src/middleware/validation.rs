use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::CatalogError;

/// JSON body extractor that also runs `validator` rules.
///
/// Every failure, from a missing content type to a field out of range, is
/// reported as 422 so the request never reaches storage.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = CatalogError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| CatalogError::Validation(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| CatalogError::Validation(errors.to_string()))?;

        Ok(ValidatedJson(value))
    }
}
