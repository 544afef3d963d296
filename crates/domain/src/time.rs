//! Time and timestamp helpers.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

/// UTC timestamp used for `last_known_power_state_time` and "as of" labels.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Format a timestamp as `MM/DD/YYYY HH:MM` (24-hour) in the given zone.
///
/// The dashboard passes `chrono::Local` so each instant is shown with the
/// offset in force at that instant, daylight saving included.
#[must_use]
pub fn format_timestamp<Tz>(ts: &Timestamp, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    ts.with_timezone(tz).format("%m/%d/%Y %H:%M").to_string()
}

/// The `"As of …"` caption shown under a host's power state.
#[must_use]
pub fn as_of_caption<Tz>(ts: &Timestamp, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("As of {}", format_timestamp(ts, tz))
}
