//! Field rules for flight create/edit input.
//!
//! Rules are checked in [`FlightField::ALL`] order so callers can report the
//! first failing field.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::model::FlightStatus;

/// One or two uppercase letters followed by one to three digits.
static GATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{1,2}[0-9]{1,3}$").expect("gate pattern compiles"));

pub const AIRLINE_LEN: (usize, usize) = (2, 50);
pub const DESTINATION_LEN: (usize, usize) = (2, 100);

/// Editable fields of a flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlightField {
    Airline,
    Destination,
    Gate,
    DepartureTime,
    Status,
}

impl FlightField {
    pub const ALL: [Self; 5] = [Self::Airline, Self::Destination, Self::Gate, Self::DepartureTime, Self::Status];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Airline => "Airline",
            Self::Destination => "Destination",
            Self::Gate => "Gate",
            Self::DepartureTime => "Departure Time",
            Self::Status => "Status",
        }
    }

    /// Banner text shown when this is the first invalid field on submit.
    #[must_use]
    pub fn invalid_message(self) -> &'static str {
        match self {
            Self::Airline => "Please check the airline field",
            Self::Destination => "Please check the destination field",
            Self::Gate => "Please enter a valid gate (e.g., A12, B3)",
            Self::DepartureTime => "Please select a valid departure time",
            Self::Status => "Please select a valid status",
        }
    }

    /// Check `value` against this field's rule.
    ///
    /// # Errors
    ///
    /// Returns the first rule the value breaks.
    pub fn check(self, value: &str) -> Result<(), FieldError> {
        match self {
            Self::Airline => check_length(value, AIRLINE_LEN),
            Self::Destination => check_length(value, DESTINATION_LEN),
            Self::Gate => check_gate(value),
            Self::DepartureTime => required(value),
            Self::Status => {
                required(value)?;
                FlightStatus::parse(value).map(|_| ()).ok_or(FieldError::UnknownStatus)
            }
        }
    }
}

/// Why a field value was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("is required")]
    Required,
    #[error("must be at least {0} characters")]
    TooShort(usize),
    #[error("must be at most {0} characters")]
    TooLong(usize),
    #[error("must be 1-2 uppercase letters followed by 1-3 digits")]
    GatePattern,
    #[error("must be one of the known statuses")]
    UnknownStatus,
}

/// True when `gate` looks like `A12` or `BC123`.
#[must_use]
pub fn is_valid_gate(gate: &str) -> bool {
    GATE_PATTERN.is_match(gate)
}

fn required(value: &str) -> Result<(), FieldError> {
    if value.is_empty() { Err(FieldError::Required) } else { Ok(()) }
}

fn check_length(value: &str, (min, max): (usize, usize)) -> Result<(), FieldError> {
    required(value)?;
    let len = value.chars().count();
    if len < min {
        return Err(FieldError::TooShort(min));
    }
    if len > max {
        return Err(FieldError::TooLong(max));
    }
    Ok(())
}

fn check_gate(value: &str) -> Result<(), FieldError> {
    required(value)?;
    if is_valid_gate(value) { Ok(()) } else { Err(FieldError::GatePattern) }
}
