use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Venue not found")]
    VenueNotFound,

    #[error("Event not found")]
    EventNotFound,

    #[error("No matching events found")]
    NoMatchingEvents,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    InvalidPath(String),

    #[error("Venue {0} does not exist")]
    UnknownVenue(i32),

    #[error("Venue {0} still has events and cannot be deleted")]
    VenueInUse(i32),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CatalogError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::VenueNotFound | Self::EventNotFound | Self::NoMatchingEvents => {
                StatusCode::NOT_FOUND
            }
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Self::UnknownVenue(_) | Self::VenueInUse(_) => StatusCode::CONFLICT,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = match &self {
            Self::Database(e) => {
                tracing::error!("storage error: {:?}", e);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_status_codes() {
        assert_eq!(CatalogError::VenueNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(CatalogError::EventNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(CatalogError::NoMatchingEvents.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            CatalogError::Validation("name: too short".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            CatalogError::InvalidPath("not an integer".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(CatalogError::UnknownVenue(7).status_code(), StatusCode::CONFLICT);
        assert_eq!(CatalogError::VenueInUse(7).status_code(), StatusCode::CONFLICT);
        assert_eq!(
            CatalogError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn storage_details_are_not_leaked() {
        let response = CatalogError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
