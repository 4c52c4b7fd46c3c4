//! Display formatting for statuses and departure times.
//!
//! Dates render in an en-US style with zero-padded 12-hour clock times.
//! Anything that does not parse as a timestamp is shown exactly as given.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDateTime};

use crate::model::FlightStatus;

/// Naive layouts accepted in addition to RFC 3339.
const NAIVE_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Named date formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateFormat {
    /// `Mar 5, 02:30 PM`
    Short,
    /// `02:30 PM`
    Time,
    /// `Wed, Mar 5`
    Date,
    /// `Wed, Mar 5, 02:30 PM`
    #[default]
    Medium,
}

impl DateFormat {
    /// Look up a format by name. Unknown names get [`DateFormat::Medium`].
    #[must_use]
    pub fn named(name: &str) -> Self {
        match name {
            "short" => Self::Short,
            "time" => Self::Time,
            "date" => Self::Date,
            _ => Self::Medium,
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            Self::Short => "%b %-d, %I:%M %p",
            Self::Time => "%I:%M %p",
            Self::Date => "%a, %b %-d",
            Self::Medium => "%a, %b %-d, %I:%M %p",
        }
    }
}

/// Display label for a status.
#[must_use]
pub fn status_label(status: FlightStatus) -> &'static str {
    status.label()
}

/// Format a departure timestamp for display.
///
/// Empty input gives an empty string; input that is not a recognizable
/// timestamp is returned unchanged.
#[must_use]
pub fn format_flight_date(raw: &str, format: DateFormat) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match parse_timestamp(raw) {
        Some(ts) => ts.format(format.pattern()).to_string(),
        None => raw.to_owned(),
    }
}

/// Parse an RFC 3339 or naive ISO timestamp into wall-clock time.
///
/// Offsets are kept as written: `14:30+02:00` stays `14:30`.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.naive_local());
    }
    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
}

/// Trim an ISO timestamp to `YYYY-MM-DDTHH:MM` for a `datetime-local` input.
#[must_use]
pub fn to_datetime_input(iso: &str) -> String {
    iso.chars().take(16).collect()
}
