use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Event {
    pub event_id: i32,
    pub venue_id: i32,
    pub title: String,
    pub event_type: String,
    pub event_date: DateTime<Utc>,
    pub base_price: f64,
    pub status: String,
}

/// Request body for `POST /v1/events/`.
///
/// `event_date` may be omitted, in which case the store uses the creation time.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewEvent {
    pub venue_id: i32,
    #[validate(length(min = 1, max = 120), custom(function = "super::not_blank"))]
    pub title: String,
    #[validate(length(min = 1, max = 50), custom(function = "super::not_blank"))]
    pub event_type: String,
    #[serde(default, deserialize_with = "deserialize_event_date")]
    pub event_date: Option<DateTime<Utc>>,
    // NUMERIC(10, 2)
    #[validate(range(min = 0.0, max = 99_999_999.99))]
    pub base_price: f64,
    #[validate(length(min = 1, max = 20), custom(function = "super::not_blank"))]
    pub status: String,
}

impl NewEvent {
    /// Status as it is persisted. Search upper-cases its input too, so both sides agree.
    pub fn normalized_status(&self) -> String {
        self.status.trim().to_uppercase()
    }
}

/// Parses an RFC 3339 timestamp, or one without an offset which is taken as UTC.
pub fn parse_event_date(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Ok(date.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("invalid datetime: {raw}"))
}

fn deserialize_event_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_event_date(&raw).map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Rounds to the two fractional digits kept by the `base_price` column.
///
/// Matches PostgreSQL's `float8::NUMERIC(10, 2)`: the float is first written
/// with 15 significant digits, then rounded half away from zero. Rounding the
/// binary value directly would turn 1.005 into 1.00.
pub fn round_price(price: f64) -> f64 {
    if !price.is_finite() {
        return price;
    }

    // e.g. "1.00500000000000e0"
    let scientific = format!("{:.14e}", price.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return price;
    };
    let (Ok(digits), Ok(exponent)) = (
        mantissa.replace('.', "").parse::<i128>(),
        exponent.parse::<i32>(),
    ) else {
        return price;
    };

    // value = digits * 10^(exponent - 14); cents = value * 100
    let shift = exponent - 12;
    let cents = match shift {
        s if s >= 0 => match 10_i128.checked_pow(s as u32).and_then(|p| digits.checked_mul(p)) {
            Some(cents) => cents,
            None => return price,
        },
        // 15 digits divided by more than 10^16 always rounds to zero
        s if s < -16 => 0,
        s => {
            let divisor = 10_i128.pow(s.unsigned_abs());
            (digits + divisor / 2) / divisor
        }
    };

    (cents as f64 / 100.0).copysign(price)
}

/// Query string of `GET /v1/events/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventFilter {
    pub city: Option<String>,
    pub event_type: Option<String>,
    pub status: Option<String>,
}

impl EventFilter {
    /// Drops empty filters. The status is trimmed and upper-cased the same way
    /// it is on write.
    pub fn normalized(self) -> Self {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        Self {
            city: present(self.city),
            event_type: present(self.event_type),
            status: present(self.status.map(|s| s.trim().to_uppercase())),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.city.is_none() && self.event_type.is_none() && self.status.is_none()
    }
}
