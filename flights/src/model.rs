//! Flight records and mutation payloads as exchanged with the flight API.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Operational status of a flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightStatus {
    /// Server default for newly created flights.
    #[default]
    Scheduled,
    OnTime,
    Delayed,
    Cancelled,
    Landed,
}

impl FlightStatus {
    /// Every status in display order.
    pub const ALL: [Self; 5] = [Self::Scheduled, Self::OnTime, Self::Delayed, Self::Cancelled, Self::Landed];

    /// Wire name, e.g. `"ON_TIME"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::OnTime => "ON_TIME",
            Self::Delayed => "DELAYED",
            Self::Cancelled => "CANCELLED",
            Self::Landed => "LANDED",
        }
    }

    /// Human-readable label, e.g. `"On Time"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::OnTime => "On Time",
            Self::Delayed => "Delayed",
            Self::Cancelled => "Cancelled",
            Self::Landed => "Landed",
        }
    }

    /// Parse a wire name. Returns `None` for anything outside the fixed set.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flight record as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: i64,
    pub flight_number: String,
    pub airline: String,
    pub destination: String,
    pub gate: String,
    /// ISO-8601 timestamp string, passed through untouched.
    pub departure_time: String,
    pub status: FlightStatus,
}

/// Body for `POST /flights/create`. The server assigns the status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFlightRequest {
    pub airline: String,
    pub destination: String,
    pub gate: String,
    pub departure_time: String,
}

/// Body for `PATCH /flights/update/{id}`.
///
/// Only the mutable subset of a flight can appear here. Absent fields are
/// left unchanged by the server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFlightRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<FlightStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>,
}

impl UpdateFlightRequest {
    /// True when the patch would not change anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.gate.is_none() && self.departure_time.is_none()
    }
}
