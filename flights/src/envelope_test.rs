use super::*;
use crate::model::{Flight, FlightStatus};
use serde_json::json;

fn page_json() -> serde_json::Value {
    json!({
        "success": true,
        "message": null,
        "data": {
            "content": [{
                "id": 1,
                "flightNumber": "LH400",
                "airline": "Lufthansa",
                "destination": "Frankfurt",
                "gate": "A12",
                "departureTime": "2025-03-05T14:30:00",
                "status": "SCHEDULED"
            }],
            "totalElements": 21,
            "totalPages": 3,
            "number": 0,
            "size": 10,
            "pageable": { "sort": [] },
            "last": false
        },
        "errorCode": null,
        "timestamp": "2025-03-05T10:00:00"
    })
}

#[test]
fn successful_page_envelope_unwraps_to_data() {
    let envelope: ApiResponse<PageResponse<Flight>> = serde_json::from_value(page_json()).unwrap();
    let page = envelope.into_data("Failed to fetch flights").unwrap();
    assert_eq!(page.total_elements, 21);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.content[0].status, FlightStatus::Scheduled);
}

#[test]
fn failed_envelope_uses_server_message() {
    let envelope: ApiResponse<Flight> = serde_json::from_value(json!({
        "success": false,
        "message": "Flight not found",
        "data": null,
        "errorCode": "NOT_FOUND",
        "timestamp": "2025-03-05T10:00:00"
    }))
    .unwrap();
    let err = envelope.into_data("Failed to fetch flight").unwrap_err();
    assert_eq!(
        err,
        ApiError::Envelope { message: "Flight not found".to_owned(), code: Some("NOT_FOUND".to_owned()) }
    );
    assert_eq!(err.to_string(), "Flight not found");
}

#[test]
fn failed_envelope_without_message_uses_fallback() {
    let envelope: ApiResponse<Flight> = serde_json::from_value(json!({ "success": false })).unwrap();
    let err = envelope.into_data("Failed to fetch flight").unwrap_err();
    assert_eq!(err.user_message("ignored"), "Failed to fetch flight");
}

#[test]
fn successful_envelope_missing_data_is_an_error() {
    let envelope: ApiResponse<Flight> = serde_json::from_value(json!({ "success": true, "data": null })).unwrap();
    assert!(matches!(envelope.into_data("Failed to fetch flight"), Err(ApiError::Envelope { .. })));
}

#[test]
fn from_status_reads_message_from_json_body() {
    let err = ApiError::from_status(400, r#"{"message":"Gate already assigned","status":400}"#);
    assert_eq!(err, ApiError::Status { status: 400, message: Some("Gate already assigned".to_owned()) });
    assert_eq!(err.user_message("Failed to create flight. Please try again."), "Gate already assigned");
}

#[test]
fn from_status_ignores_non_json_and_blank_messages() {
    assert_eq!(ApiError::from_status(502, "<html>Bad Gateway</html>"), ApiError::Status { status: 502, message: None });
    assert_eq!(ApiError::from_status(500, r#"{"message":"  "}"#), ApiError::Status { status: 500, message: None });
}

#[test]
fn transport_and_decode_errors_fall_back() {
    let fallback = "Failed to load flights";
    assert_eq!(ApiError::Transport("offline".to_owned()).user_message(fallback), fallback);
    assert_eq!(ApiError::Decode("eof".to_owned()).user_message(fallback), fallback);
    assert_eq!(ApiError::Status { status: 503, message: None }.user_message(fallback), fallback);
}
