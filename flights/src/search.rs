//! Sparse search criteria for `GET /flights/search`.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use serde::{Deserialize, Serialize};

use crate::model::FlightStatus;

/// Optional filters. A `None` field is not sent at all.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<FlightStatus>,
}

impl FlightSearchRequest {
    /// Build criteria from raw text inputs, dropping blank fields.
    ///
    /// `status` is a wire name (`"DELAYED"`); blank or unknown values mean
    /// "any status".
    #[must_use]
    pub fn from_inputs(flight_number: &str, airline: &str, status: &str) -> Self {
        Self {
            flight_number: keep_filled(flight_number),
            airline: keep_filled(airline),
            status: FlightStatus::parse(status.trim()),
        }
    }

    /// True when no filter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flight_number.is_none() && self.airline.is_none() && self.status.is_none()
    }

    /// Query parameters for the filters that are set, in a stable order.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(flight_number) = self.flight_number.as_deref().and_then(keep_filled) {
            pairs.push(("flightNumber", flight_number));
        }
        if let Some(airline) = self.airline.as_deref().and_then(keep_filled) {
            pairs.push(("airline", airline));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_owned()));
        }
        pairs
    }
}

fn keep_filled(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
