use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Venue {
    pub venue_id: i32,
    pub name: String,
    pub city: String,
    pub capacity: i32,
}

/// Request body for `POST /v1/venues/`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewVenue {
    #[validate(length(min = 1, max = 100), custom(function = "super::not_blank"))]
    pub name: String,
    #[validate(length(min = 1, max = 50), custom(function = "super::not_blank"))]
    pub city: String,
    #[validate(range(min = 1))]
    pub capacity: i32,
}
