pub mod config;
pub mod controllers;
pub mod database;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod repository;

use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use repository::{EventRepository, InMemoryCatalog, PostgresCatalog, VenueRepository};

// Shared state for the whole application
#[derive(Clone)]
pub struct AppState {
    pub venues: Arc<dyn VenueRepository>,
    pub events: Arc<dyn EventRepository>,
    pub metrics: PrometheusHandle,
}

impl AppState {
    pub fn new(
        venues: Arc<dyn VenueRepository>,
        events: Arc<dyn EventRepository>,
        metrics: PrometheusHandle,
    ) -> Arc<Self> {
        Arc::new(Self { venues, events, metrics })
    }

    /// Both repositories backed by the same connection pool.
    pub fn postgres(db: database::Database, metrics: PrometheusHandle) -> Arc<Self> {
        let catalog = PostgresCatalog::new(db);
        Self::new(Arc::new(catalog.clone()), Arc::new(catalog), metrics)
    }

    pub fn in_memory(metrics: PrometheusHandle) -> Arc<Self> {
        let catalog = InMemoryCatalog::new();
        Self::new(Arc::new(catalog.clone()), Arc::new(catalog), metrics)
    }
}

/// The full HTTP surface: `/v1` catalog routes, `/health` and `/metrics`.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(controllers::routes())
        .route_layer(axum::middleware::from_fn(middleware::track_metrics))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
