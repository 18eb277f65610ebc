//! Timestamp normalization for the three encodings used across Takeout exports.
//!
//! Every decoder returns the same [`Timestamp`] type, so instants coming from
//! different schemas compare and sort against each other directly.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Canonical UTC instant carried by every record
pub type Timestamp = DateTime<Utc>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    #[error("value is absent")]
    Missing,

    #[error("expected {expected}, found {found}")]
    WrongType { expected: &'static str, found: &'static str },

    #[error("{value:?} is not an ISO-8601 date-time with a UTC offset: {reason}")]
    InvalidIso { value: String, reason: String },

    #[error("{value:?} is not an integer epoch count")]
    NotAnInteger { value: String },

    #[error("{value} {unit} since the epoch is out of range")]
    OutOfRange { value: i64, unit: &'static str },
}

/// Parse an ISO-8601 date-time that carries a zone designator (`Z` or `+hh:mm`).
///
/// Offsets other than UTC are converted, never dropped. A string without zone
/// information is rejected rather than guessed.
pub fn from_iso_string(s: &str) -> Result<Timestamp, TimestampError> {
    s.parse::<DateTime<Utc>>()
        .map_err(|e| TimestampError::InvalidIso { value: s.to_string(), reason: e.to_string() })
}

/// Parse a base-10 count of milliseconds since the Unix epoch
pub fn from_epoch_millis_string(s: &str) -> Result<Timestamp, TimestampError> {
    from_epoch_millis(parse_integer(s)?)
}

/// Convert a count of milliseconds since the Unix epoch
pub fn from_epoch_millis(millis: i64) -> Result<Timestamp, TimestampError> {
    DateTime::from_timestamp_millis(millis)
        .ok_or(TimestampError::OutOfRange { value: millis, unit: "milliseconds" })
}

/// Convert a count of microseconds since the Unix epoch.
///
/// Built straight from the epoch offset; no local-time value exists at any step,
/// so the process timezone cannot leak into the result.
pub fn from_epoch_micros(micros: i64) -> Result<Timestamp, TimestampError> {
    DateTime::from_timestamp_micros(micros)
        .ok_or(TimestampError::OutOfRange { value: micros, unit: "microseconds" })
}

/// Parse a base-10 count of microseconds since the Unix epoch
pub fn from_epoch_micros_string(s: &str) -> Result<Timestamp, TimestampError> {
    from_epoch_micros(parse_integer(s)?)
}

fn parse_integer(s: &str) -> Result<i64, TimestampError> {
    s.parse::<i64>().map_err(|_| TimestampError::NotAnInteger { value: s.to_string() })
}
