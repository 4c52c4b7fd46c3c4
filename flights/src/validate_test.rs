use super::*;

#[test]
fn gate_accepts_letter_digit_forms() {
    for gate in ["A12", "B3", "AB123", "Z9"] {
        assert!(is_valid_gate(gate), "{gate} should be accepted");
        assert_eq!(FlightField::Gate.check(gate), Ok(()));
    }
}

#[test]
fn gate_rejects_lowercase_digits_only_and_overlong() {
    for gate in ["a12", "123", "ABC1234", "ABC1", "A1234", "A", "A 12", "A12 "] {
        assert!(!is_valid_gate(gate), "{gate} should be rejected");
    }
    assert_eq!(FlightField::Gate.check("a12"), Err(FieldError::GatePattern));
}

#[test]
fn gate_rejects_non_ascii_digits() {
    assert!(!is_valid_gate("A١٢"));
}

#[test]
fn empty_gate_is_required_error() {
    assert_eq!(FlightField::Gate.check(""), Err(FieldError::Required));
}

#[test]
fn airline_length_bounds() {
    assert_eq!(FlightField::Airline.check(""), Err(FieldError::Required));
    assert_eq!(FlightField::Airline.check("K"), Err(FieldError::TooShort(2)));
    assert_eq!(FlightField::Airline.check("KL"), Ok(()));
    assert_eq!(FlightField::Airline.check(&"x".repeat(50)), Ok(()));
    assert_eq!(FlightField::Airline.check(&"x".repeat(51)), Err(FieldError::TooLong(50)));
}

#[test]
fn destination_length_bounds() {
    assert_eq!(FlightField::Destination.check("X"), Err(FieldError::TooShort(2)));
    assert_eq!(FlightField::Destination.check(&"y".repeat(100)), Ok(()));
    assert_eq!(FlightField::Destination.check(&"y".repeat(101)), Err(FieldError::TooLong(100)));
}

#[test]
fn length_counts_characters_not_bytes() {
    assert_eq!(FlightField::Destination.check("Zürich"), Ok(()));
    assert_eq!(FlightField::Airline.check(&"é".repeat(50)), Ok(()));
}

#[test]
fn departure_time_only_requires_a_value() {
    assert_eq!(FlightField::DepartureTime.check(""), Err(FieldError::Required));
    assert_eq!(FlightField::DepartureTime.check("2025-03-05T14:30"), Ok(()));
}

#[test]
fn status_must_be_in_fixed_set() {
    assert_eq!(FlightField::Status.check("ON_TIME"), Ok(()));
    assert_eq!(FlightField::Status.check(""), Err(FieldError::Required));
    assert_eq!(FlightField::Status.check("BOARDING"), Err(FieldError::UnknownStatus));
}

#[test]
fn invalid_messages_name_the_field() {
    assert_eq!(FlightField::Airline.invalid_message(), "Please check the airline field");
    assert_eq!(FlightField::Destination.invalid_message(), "Please check the destination field");
    assert_eq!(FlightField::Gate.invalid_message(), "Please enter a valid gate (e.g., A12, B3)");
    assert_eq!(FlightField::DepartureTime.invalid_message(), "Please select a valid departure time");
}

#[test]
fn field_error_display() {
    assert_eq!(FieldError::TooShort(2).to_string(), "must be at least 2 characters");
    assert_eq!(FieldError::Required.to_string(), "is required");
}
