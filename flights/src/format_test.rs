use super::*;

const DEPARTURE: &str = "2025-03-05T14:30:00";

#[test]
fn formats_each_named_style() {
    assert_eq!(format_flight_date(DEPARTURE, DateFormat::Short), "Mar 5, 02:30 PM");
    assert_eq!(format_flight_date(DEPARTURE, DateFormat::Time), "02:30 PM");
    assert_eq!(format_flight_date(DEPARTURE, DateFormat::Date), "Wed, Mar 5");
    assert_eq!(format_flight_date(DEPARTURE, DateFormat::Medium), "Wed, Mar 5, 02:30 PM");
}

#[test]
fn named_lookup_defaults_to_medium() {
    assert_eq!(DateFormat::named("short"), DateFormat::Short);
    assert_eq!(DateFormat::named("time"), DateFormat::Time);
    assert_eq!(DateFormat::named("date"), DateFormat::Date);
    assert_eq!(DateFormat::named("medium"), DateFormat::Medium);
    assert_eq!(DateFormat::named("fancy"), DateFormat::Medium);
    assert_eq!(DateFormat::default(), DateFormat::Medium);
}

#[test]
fn morning_times_are_zero_padded() {
    assert_eq!(format_flight_date("2025-12-24T07:05", DateFormat::Time), "07:05 AM");
}

#[test]
fn accepts_fractional_seconds_and_offsets() {
    assert_eq!(format_flight_date("2025-03-05T14:30:00.123", DateFormat::Time), "02:30 PM");
    assert_eq!(format_flight_date("2025-03-05T14:30:00+02:00", DateFormat::Time), "02:30 PM");
    assert_eq!(format_flight_date("2025-03-05T14:30:00Z", DateFormat::Short), "Mar 5, 02:30 PM");
}

#[test]
fn empty_input_gives_empty_output() {
    assert_eq!(format_flight_date("", DateFormat::Medium), "");
}

#[test]
fn malformed_input_is_returned_unchanged() {
    assert_eq!(format_flight_date("not a date", DateFormat::Medium), "not a date");
    assert_eq!(format_flight_date("2025-13-40T99:00", DateFormat::Short), "2025-13-40T99:00");
}

#[test]
fn datetime_input_truncates_to_minutes() {
    assert_eq!(to_datetime_input("2025-03-05T14:30:00.000Z"), "2025-03-05T14:30");
    assert_eq!(to_datetime_input("2025-03-05T14:30"), "2025-03-05T14:30");
    assert_eq!(to_datetime_input("short"), "short");
}

#[test]
fn status_label_delegates_to_status() {
    assert_eq!(status_label(FlightStatus::OnTime), "On Time");
    assert_eq!(status_label(FlightStatus::Cancelled), "Cancelled");
}
