//! Storage access for venues and events.
//!
//! Handlers only see the two traits below. [`PostgresCatalog`] is the
//! production store; [`InMemoryCatalog`] keeps the same semantics in process
//! memory and backs the router tests.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::models::{Event, EventFilter, NewEvent, NewVenue, Venue};

pub use memory::InMemoryCatalog;
pub use postgres::PostgresCatalog;

#[async_trait]
pub trait VenueRepository: Send + Sync {
    /// All venues in insertion order.
    async fn list_venues(&self) -> CatalogResult<Vec<Venue>>;

    async fn get_venue(&self, venue_id: i32) -> CatalogResult<Option<Venue>>;

    async fn create_venue(&self, venue: NewVenue) -> CatalogResult<Venue>;

    /// Returns `false` when no venue had this id. Fails with
    /// `CatalogError::VenueInUse` while events still reference the venue.
    async fn delete_venue(&self, venue_id: i32) -> CatalogResult<bool>;
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn list_events(&self) -> CatalogResult<Vec<Event>>;

    async fn get_event(&self, event_id: i32) -> CatalogResult<Option<Event>>;

    /// Fails with `CatalogError::UnknownVenue` when `venue_id` has no venue;
    /// nothing is stored in that case.
    async fn create_event(&self, event: NewEvent) -> CatalogResult<Event>;

    /// Removes the event together with its seat templates.
    async fn delete_event(&self, event_id: i32) -> CatalogResult<bool>;

    /// Events joined with their venue and filtered by every filter that is set:
    /// city and event type match case-insensitive substrings, status matches
    /// exactly after upper-casing.
    async fn search_events(&self, filter: &EventFilter) -> CatalogResult<Vec<Event>>;
}

/// `ILIKE` pattern matching `term` as a literal substring.
pub(crate) fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
