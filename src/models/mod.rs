pub mod event;
pub mod seat_template;
pub mod venue;

pub use event::{Event, EventFilter, NewEvent};
pub use seat_template::SeatTemplate;
pub use venue::{NewVenue, Venue};

use validator::ValidationError;

// Rejects strings made only of whitespace; length limits are checked separately
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
