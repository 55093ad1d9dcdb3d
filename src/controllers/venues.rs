use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use crate::error::{CatalogError, CatalogResult};
use crate::middleware::{IdPath, ValidatedJson};
use crate::models::{NewVenue, Venue};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/v1/venues", get(list_venues).post(create_venue))
        .route("/v1/venues/", get(list_venues).post(create_venue))
        .route("/v1/venues/{venue_id}", get(get_venue).delete(delete_venue))
}

// GET /v1/venues/
async fn list_venues(State(state): State<Arc<AppState>>) -> CatalogResult<Json<Vec<Venue>>> {
    Ok(Json(state.venues.list_venues().await?))
}

// GET /v1/venues/{venue_id}
async fn get_venue(
    State(state): State<Arc<AppState>>,
    IdPath(venue_id): IdPath,
) -> CatalogResult<Json<Venue>> {
    state
        .venues
        .get_venue(venue_id)
        .await?
        .map(Json)
        .ok_or(CatalogError::VenueNotFound)
}

// POST /v1/venues/
async fn create_venue(
    State(state): State<Arc<AppState>>,
    ValidatedJson(venue): ValidatedJson<NewVenue>,
) -> CatalogResult<(StatusCode, Json<Venue>)> {
    let created = state.venues.create_venue(venue).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

// DELETE /v1/venues/{venue_id}
async fn delete_venue(
    State(state): State<Arc<AppState>>,
    IdPath(venue_id): IdPath,
) -> CatalogResult<StatusCode> {
    if state.venues.delete_venue(venue_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CatalogError::VenueNotFound)
    }
}
