use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use crate::error::{CatalogError, CatalogResult};
use crate::middleware::{IdPath, ValidatedJson};
use crate::models::{Event, EventFilter, NewEvent};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/v1/events", get(list_events).post(create_event))
        .route("/v1/events/", get(list_events).post(create_event))
        .route("/v1/events/search", get(search_events))
        .route("/v1/events/{event_id}", get(get_event).delete(delete_event))
}

// GET /v1/events/
async fn list_events(State(state): State<Arc<AppState>>) -> CatalogResult<Json<Vec<Event>>> {
    Ok(Json(state.events.list_events().await?))
}

// GET /v1/events/search?city=&event_type=&status=
//
// Unlike the plain listing, an empty result is a 404.
async fn search_events(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<EventFilter>,
) -> CatalogResult<Json<Vec<Event>>> {
    let filter = filter.normalized();
    let events = state.events.search_events(&filter).await?;

    if events.is_empty() {
        return Err(CatalogError::NoMatchingEvents);
    }
    Ok(Json(events))
}

// GET /v1/events/{event_id}
async fn get_event(
    State(state): State<Arc<AppState>>,
    IdPath(event_id): IdPath,
) -> CatalogResult<Json<Event>> {
    state
        .events
        .get_event(event_id)
        .await?
        .map(Json)
        .ok_or(CatalogError::EventNotFound)
}

// POST /v1/events/
async fn create_event(
    State(state): State<Arc<AppState>>,
    ValidatedJson(event): ValidatedJson<NewEvent>,
) -> CatalogResult<(StatusCode, Json<Event>)> {
    let created = state.events.create_event(event).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

// DELETE /v1/events/{event_id}
async fn delete_event(
    State(state): State<Arc<AppState>>,
    IdPath(event_id): IdPath,
) -> CatalogResult<StatusCode> {
    if state.events.delete_event(event_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CatalogError::EventNotFound)
    }
}
