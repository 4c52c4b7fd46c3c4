//! Search panel inputs.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use flights::{FlightSearchRequest, FlightStatus};

/// Raw text of the three search inputs. `status` holds a wire name or `""`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub flight_number: String,
    pub airline: String,
    pub status: String,
}

impl SearchForm {
    /// Criteria to emit on submit, with blank fields stripped.
    #[must_use]
    pub fn criteria(&self) -> FlightSearchRequest {
        FlightSearchRequest::from_inputs(&self.flight_number, &self.airline, &self.status)
    }

    /// Reset every input to blank.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// `(value, label)` pairs for the status select, led by the "any" choice.
#[must_use]
pub fn status_filter_options() -> Vec<(&'static str, &'static str)> {
    std::iter::once(("", "All Statuses"))
        .chain(FlightStatus::ALL.iter().map(|s| (s.as_str(), s.label())))
        .collect()
}
