use super::*;
use crate::model::FlightStatus;

#[test]
fn paths_match_flight_resource_layout() {
    let criteria = FlightSearchRequest::default();
    assert_eq!(FlightEndpoint::List { page: 0, size: 10 }.path(), "/flights/getall");
    assert_eq!(FlightEndpoint::Search { criteria: &criteria, page: 0, size: 10 }.path(), "/flights/search");
    assert_eq!(FlightEndpoint::Get(7).path(), "/flights/get/7");
    assert_eq!(FlightEndpoint::Create.path(), "/flights/create");
    assert_eq!(FlightEndpoint::Update(7).path(), "/flights/update/7");
    assert_eq!(FlightEndpoint::Delete(7).path(), "/flights/delete/7");
}

#[test]
fn list_query_carries_page_and_size() {
    assert_eq!(
        FlightEndpoint::List { page: 2, size: 25 }.query(),
        vec![("page", "2".to_owned()), ("size", "25".to_owned())]
    );
}

#[test]
fn search_query_appends_only_set_filters() {
    let criteria = FlightSearchRequest { status: Some(FlightStatus::Landed), ..Default::default() };
    assert_eq!(
        FlightEndpoint::Search { criteria: &criteria, page: 1, size: 10 }.query(),
        vec![("page", "1".to_owned()), ("size", "10".to_owned()), ("status", "LANDED".to_owned())]
    );
}

#[test]
fn mutations_have_no_query() {
    assert!(FlightEndpoint::Create.query().is_empty());
    assert!(FlightEndpoint::Delete(3).query().is_empty());
}

#[test]
fn url_trims_trailing_slash_on_root() {
    assert_eq!(FlightEndpoint::Get(4).url("http://localhost:8080/api/"), "http://localhost:8080/api/flights/get/4");
    assert_eq!(FlightEndpoint::Create.url("/api"), "/api/flights/create");
}
