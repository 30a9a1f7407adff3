//! Build identity conventions shared across the build-metadata model.
//!
//! Every record that carries a build's start time stores it as text in the
//! `STARTED_FORMAT` layout (`yyyy-MM-dd'T'HH:mm:ss.SSSZ`), so that consumers
//! parsing one record can parse them all.

use chrono::{DateTime, FixedOffset, TimeZone};

use crate::error::BuildInfoError;

/// Textual layout of a build's start time, e.g. `2012-02-16T10:15:30.123+0200`.
pub const STARTED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Format a date with [`STARTED_FORMAT`], keeping the date's own offset.
pub fn format_started<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    date.format(STARTED_FORMAT).to_string()
}

/// Parse a timestamp written in [`STARTED_FORMAT`].
pub fn parse_started(value: &str) -> Result<DateTime<FixedOffset>, BuildInfoError> {
    DateTime::parse_from_str(value, STARTED_FORMAT).map_err(|e| BuildInfoError::InvalidTimestamp {
        value: value.to_string(),
        reason: e.to_string(),
    })
}
