use async_trait::async_trait;
use tracing::{debug, info};

use super::{like_pattern, EventRepository, VenueRepository};
use crate::database::Database;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{Event, EventFilter, NewEvent, NewVenue, Venue};

const VENUE_COLUMNS: &str = "venue_id, name, city, capacity";

// base_price is NUMERIC(10, 2); read it back as a float like the seat prices
const EVENT_COLUMNS: &str =
    "event_id, venue_id, title, event_type, event_date, base_price::FLOAT8 AS base_price, status";

#[derive(Clone)]
pub struct PostgresCatalog {
    db: Database,
}

impl PostgresCatalog {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation())
}

#[async_trait]
impl VenueRepository for PostgresCatalog {
    async fn list_venues(&self) -> CatalogResult<Vec<Venue>> {
        let venues = sqlx::query_as::<_, Venue>(&format!(
            "SELECT {VENUE_COLUMNS} FROM venues ORDER BY venue_id"
        ))
        .fetch_all(&self.db.pool)
        .await?;

        debug!("Loaded {} venues", venues.len());
        Ok(venues)
    }

    async fn get_venue(&self, venue_id: i32) -> CatalogResult<Option<Venue>> {
        let venue = sqlx::query_as::<_, Venue>(&format!(
            "SELECT {VENUE_COLUMNS} FROM venues WHERE venue_id = $1"
        ))
        .bind(venue_id)
        .fetch_optional(&self.db.pool)
        .await?;

        Ok(venue)
    }

    async fn create_venue(&self, venue: NewVenue) -> CatalogResult<Venue> {
        let created = sqlx::query_as::<_, Venue>(&format!(
            "INSERT INTO venues (name, city, capacity)
             VALUES ($1, $2, $3)
             RETURNING {VENUE_COLUMNS}"
        ))
        .bind(&venue.name)
        .bind(&venue.city)
        .bind(venue.capacity)
        .fetch_one(&self.db.pool)
        .await?;

        info!("Created venue {} ({})", created.venue_id, created.name);
        Ok(created)
    }

    async fn delete_venue(&self, venue_id: i32) -> CatalogResult<bool> {
        let result = sqlx::query("DELETE FROM venues WHERE venue_id = $1")
            .bind(venue_id)
            .execute(&self.db.pool)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    CatalogError::VenueInUse(venue_id)
                } else {
                    CatalogError::Database(e)
                }
            })?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("Deleted venue {}", venue_id);
        }
        Ok(deleted)
    }
}

#[async_trait]
impl EventRepository for PostgresCatalog {
    async fn list_events(&self) -> CatalogResult<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY event_id"
        ))
        .fetch_all(&self.db.pool)
        .await?;

        debug!("Loaded {} events", events.len());
        Ok(events)
    }

    async fn get_event(&self, event_id: i32) -> CatalogResult<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE event_id = $1"
        ))
        .bind(event_id)
        .fetch_optional(&self.db.pool)
        .await?;

        Ok(event)
    }

    async fn create_event(&self, event: NewEvent) -> CatalogResult<Event> {
        let status = event.normalized_status();

        let created = sqlx::query_as::<_, Event>(&format!(
            "INSERT INTO events (venue_id, title, event_type, event_date, base_price, status)
             VALUES ($1, $2, $3, COALESCE($4::TIMESTAMPTZ, NOW()), $5::NUMERIC(10, 2), $6)
             RETURNING {EVENT_COLUMNS}"
        ))
        .bind(event.venue_id)
        .bind(&event.title)
        .bind(&event.event_type)
        .bind(event.event_date)
        .bind(event.base_price)
        .bind(&status)
        .fetch_one(&self.db.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                CatalogError::UnknownVenue(event.venue_id)
            } else {
                CatalogError::Database(e)
            }
        })?;

        info!(
            "Created event {} at venue {} ({})",
            created.event_id, created.venue_id, created.title
        );
        Ok(created)
    }

    async fn delete_event(&self, event_id: i32) -> CatalogResult<bool> {
        let mut tx = self.db.pool.begin().await?;

        sqlx::query("DELETE FROM seat_templates WHERE event_id = $1")
            .bind(event_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM events WHERE event_id = $1")
            .bind(event_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("Deleted event {}", event_id);
        }
        Ok(deleted)
    }

    async fn search_events(&self, filter: &EventFilter) -> CatalogResult<Vec<Event>> {
        let city = filter.city.as_deref().map(like_pattern);
        let event_type = filter.event_type.as_deref().map(like_pattern);
        let status = filter.status.as_deref().map(|s| s.trim().to_uppercase());

        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT
                e.event_id,
                e.venue_id,
                e.title,
                e.event_type,
                e.event_date,
                e.base_price::FLOAT8 AS base_price,
                e.status
            FROM events e
            JOIN venues v ON v.venue_id = e.venue_id
            WHERE ($1::text IS NULL OR v.city ILIKE $1)
              AND ($2::text IS NULL OR e.event_type ILIKE $2)
              AND ($3::text IS NULL OR e.status = $3)
            ORDER BY e.event_id
            "#,
        )
        .bind(city)
        .bind(event_type)
        .bind(status)
        .fetch_all(&self.db.pool)
        .await?;

        debug!("Search {:?} matched {} events", filter, events.len());
        Ok(events)
    }
}
