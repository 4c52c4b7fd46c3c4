use super::*;

#[test]
fn badge_class_uses_kebab_case_modifier() {
    assert_eq!(badge_class(FlightStatus::OnTime), "status-badge status-badge--on-time");
    assert_eq!(badge_class(FlightStatus::Cancelled), "status-badge status-badge--cancelled");
}
