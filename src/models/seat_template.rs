use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Pricing tier of an event. Stored only; no route reads or writes it yet.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct SeatTemplate {
    pub id: i32,
    pub event_id: i32,
    pub category: String,
    pub seat_count: i32,
    pub price_modifier: f64,
}
