use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::{EventRepository, VenueRepository};
use crate::error::{CatalogError, CatalogResult};
use crate::models::event::round_price;
use crate::models::{Event, EventFilter, NewEvent, NewVenue, Venue};

#[derive(Default)]
struct Tables {
    venues: BTreeMap<i32, Venue>,
    events: BTreeMap<i32, Event>,
    last_venue_id: i32,
    last_event_id: i32,
}

/// Process-local catalog with the same rules as the PostgreSQL schema:
/// serial ids, the event → venue foreign key, and write-time status
/// normalization.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
impl VenueRepository for InMemoryCatalog {
    async fn list_venues(&self) -> CatalogResult<Vec<Venue>> {
        let tables = self.tables.read().await;
        Ok(tables.venues.values().cloned().collect())
    }

    async fn get_venue(&self, venue_id: i32) -> CatalogResult<Option<Venue>> {
        let tables = self.tables.read().await;
        Ok(tables.venues.get(&venue_id).cloned())
    }

    async fn create_venue(&self, venue: NewVenue) -> CatalogResult<Venue> {
        let mut tables = self.tables.write().await;
        tables.last_venue_id += 1;

        let created = Venue {
            venue_id: tables.last_venue_id,
            name: venue.name,
            city: venue.city,
            capacity: venue.capacity,
        };
        tables.venues.insert(created.venue_id, created.clone());

        info!("Created venue {} ({})", created.venue_id, created.name);
        Ok(created)
    }

    async fn delete_venue(&self, venue_id: i32) -> CatalogResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.events.values().any(|e| e.venue_id == venue_id) {
            return Err(CatalogError::VenueInUse(venue_id));
        }

        let deleted = tables.venues.remove(&venue_id).is_some();
        if deleted {
            info!("Deleted venue {}", venue_id);
        }
        Ok(deleted)
    }
}

#[async_trait]
impl EventRepository for InMemoryCatalog {
    async fn list_events(&self) -> CatalogResult<Vec<Event>> {
        let tables = self.tables.read().await;
        Ok(tables.events.values().cloned().collect())
    }

    async fn get_event(&self, event_id: i32) -> CatalogResult<Option<Event>> {
        let tables = self.tables.read().await;
        Ok(tables.events.get(&event_id).cloned())
    }

    async fn create_event(&self, event: NewEvent) -> CatalogResult<Event> {
        let mut tables = self.tables.write().await;
        if !tables.venues.contains_key(&event.venue_id) {
            return Err(CatalogError::UnknownVenue(event.venue_id));
        }
        tables.last_event_id += 1;

        let status = event.normalized_status();
        let created = Event {
            event_id: tables.last_event_id,
            venue_id: event.venue_id,
            title: event.title,
            event_type: event.event_type,
            event_date: event.event_date.unwrap_or_else(Utc::now),
            base_price: round_price(event.base_price),
            status,
        };
        tables.events.insert(created.event_id, created.clone());

        info!(
            "Created event {} at venue {} ({})",
            created.event_id, created.venue_id, created.title
        );
        Ok(created)
    }

    async fn delete_event(&self, event_id: i32) -> CatalogResult<bool> {
        let mut tables = self.tables.write().await;

        let deleted = tables.events.remove(&event_id).is_some();
        if deleted {
            info!("Deleted event {}", event_id);
        }
        Ok(deleted)
    }

    async fn search_events(&self, filter: &EventFilter) -> CatalogResult<Vec<Event>> {
        let tables = self.tables.read().await;
        let status = filter.status.as_deref().map(|s| s.trim().to_uppercase());

        let events: Vec<Event> = tables
            .events
            .values()
            .filter_map(|event| {
                let venue = tables.venues.get(&event.venue_id)?;
                let city_ok = filter
                    .city
                    .as_deref()
                    .map_or(true, |city| contains_ignore_case(&venue.city, city));
                let type_ok = filter
                    .event_type
                    .as_deref()
                    .map_or(true, |t| contains_ignore_case(&event.event_type, t));
                let status_ok = status.as_deref().map_or(true, |s| event.status == s);

                (city_ok && type_ok && status_ok).then(|| event.clone())
            })
            .collect();

        debug!("Search {:?} matched {} events", filter, events.len());
        Ok(events)
    }
}
