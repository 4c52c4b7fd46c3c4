//! REST helpers for the flight resource.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Transport`] since these
//! calls are only issued from browser event handlers.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Read endpoints unwrap the
//! response envelope here; callers pick the user-facing text with
//! [`ApiError::user_message`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use flights::FlightEndpoint;
use flights::{ApiError, CreateFlightRequest, Flight, FlightSearchRequest, PageResponse, UpdateFlightRequest};

use crate::state::flight_list::ListQuery;

/// Same-origin prefix the host proxies to the flight API.
pub const API_ROOT: &str = "/api";

/// Envelope fallback for list and search.
pub const FETCH_FLIGHTS_FAILED: &str = "Failed to fetch flights";
/// Envelope fallback for get-by-id.
pub const FETCH_FLIGHT_FAILED: &str = "Failed to fetch flight";

#[cfg(any(test, feature = "hydrate"))]
fn api_url(endpoint: &FlightEndpoint<'_>) -> String {
    endpoint.url(API_ROOT)
}

#[cfg(not(feature = "hydrate"))]
fn not_in_browser() -> ApiError {
    ApiError::Transport("not available on server".to_owned())
}

/// Fetch one page of the unfiltered listing.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or a failed envelope.
pub async fn fetch_flights(page: u32, size: u32) -> Result<PageResponse<Flight>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let endpoint = FlightEndpoint::List { page, size };
        http::get_enveloped(&endpoint, FETCH_FLIGHTS_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, size);
        Err(not_in_browser())
    }
}

/// Fetch one page of flights matching `criteria`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or a failed envelope.
pub async fn search_flights(
    criteria: &FlightSearchRequest,
    page: u32,
    size: u32,
) -> Result<PageResponse<Flight>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let endpoint = FlightEndpoint::Search { criteria, page, size };
        http::get_enveloped(&endpoint, FETCH_FLIGHTS_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (criteria, page, size);
        Err(not_in_browser())
    }
}

/// Run whichever listing path `query` names.
///
/// # Errors
///
/// See [`fetch_flights`] and [`search_flights`].
pub async fn load_page(query: &ListQuery) -> Result<PageResponse<Flight>, ApiError> {
    match query {
        ListQuery::All { page, size } => fetch_flights(*page, *size).await,
        ListQuery::Search { criteria, page, size } => search_flights(criteria, *page, *size).await,
    }
}

/// Fetch a single flight by id.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or a failed envelope.
pub async fn fetch_flight(id: i64) -> Result<Flight, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::get_enveloped(&FlightEndpoint::Get(id), FETCH_FLIGHT_FAILED).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(not_in_browser())
    }
}

/// Create a flight. The response body is not needed by the UI.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or non-2xx status.
pub async fn create_flight(body: &CreateFlightRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let endpoint = FlightEndpoint::Create;
        let request = gloo_net::http::Request::post(&api_url(&endpoint)).json(body);
        http::dispatch(&endpoint, request).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(not_in_browser())
    }
}

/// Patch the mutable fields of a flight.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or non-2xx status.
pub async fn update_flight(id: i64, body: &UpdateFlightRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let endpoint = FlightEndpoint::Update(id);
        let request = gloo_net::http::Request::patch(&api_url(&endpoint)).json(body);
        http::dispatch(&endpoint, request).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, body);
        Err(not_in_browser())
    }
}

/// Delete a flight.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or non-2xx status.
pub async fn delete_flight(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let endpoint = FlightEndpoint::Delete(id);
        let request = gloo_net::http::Request::delete(&api_url(&endpoint)).build();
        http::dispatch(&endpoint, request).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(not_in_browser())
    }
}

#[cfg(feature = "hydrate")]
mod http {
    use flights::{ApiError, ApiResponse, FlightEndpoint};
    use gloo_net::http::{Request, Response};
    use serde::de::DeserializeOwned;

    use super::api_url;

    /// Send a built request and turn non-2xx statuses into errors.
    pub(super) async fn dispatch(
        endpoint: &FlightEndpoint<'_>,
        request: Result<Request, gloo_net::Error>,
    ) -> Result<Response, ApiError> {
        let result = send(request).await;
        if let Err(e) = &result {
            log::warn!("flight api {} failed: {e}", endpoint.path());
        }
        result
    }

    async fn send(request: Result<Request, gloo_net::Error>) -> Result<Response, ApiError> {
        let request = request.map_err(|e| ApiError::Transport(e.to_string()))?;
        let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::from_status(status, &body))
    }

    /// GET an enveloped payload and unwrap it.
    pub(super) async fn get_enveloped<T: DeserializeOwned>(
        endpoint: &FlightEndpoint<'_>,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let request = Request::get(&api_url(endpoint)).query(endpoint.query()).build();
        let resp = dispatch(endpoint, request).await?;
        let envelope: ApiResponse<T> = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        envelope.into_data(fallback).inspect_err(|e| {
            log::warn!("flight api {} rejected: {e}", endpoint.path());
        })
    }
}
