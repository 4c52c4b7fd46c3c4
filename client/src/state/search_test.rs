use super::*;

fn form(flight_number: &str, airline: &str, status: &str) -> SearchForm {
    SearchForm { flight_number: flight_number.to_owned(), airline: airline.to_owned(), status: status.to_owned() }
}

#[test]
fn criteria_strips_every_combination_of_empty_fields() {
    let values = [("", None), ("X", Some("X"))];
    for (number, want_number) in values {
        for (airline, want_airline) in values {
            for (status, want_status) in [("", None), ("LANDED", Some(FlightStatus::Landed))] {
                let criteria = form(number, airline, status).criteria();
                assert_eq!(criteria.flight_number.as_deref(), want_number);
                assert_eq!(criteria.airline.as_deref(), want_airline);
                assert_eq!(criteria.status, want_status);
                let json = serde_json::to_value(&criteria).unwrap();
                let keys = json.as_object().unwrap();
                assert_eq!(keys.contains_key("flightNumber"), want_number.is_some());
                assert_eq!(keys.contains_key("airline"), want_airline.is_some());
                assert_eq!(keys.contains_key("status"), want_status.is_some());
            }
        }
    }
}

#[test]
fn clear_resets_all_inputs() {
    let mut search = form("AF1", "Air France", "DELAYED");
    search.clear();
    assert_eq!(search, SearchForm::default());
    assert!(search.criteria().is_empty());
}

#[test]
fn status_options_lead_with_all_statuses() {
    let options = status_filter_options();
    assert_eq!(options.len(), 6);
    assert_eq!(options[0], ("", "All Statuses"));
    assert_eq!(options[2], ("ON_TIME", "On Time"));
}
