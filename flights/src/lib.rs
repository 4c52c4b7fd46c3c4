//! Shared flight model, envelope handling, and form rules.
//!
//! This crate owns the wire representation of the remote flight API and the
//! pure rules layered on top of it. The Leptos `client`, the `flightdesk`
//! host, and the `cli` all depend on it so validation and display stay
//! identical across surfaces. Nothing here performs I/O.

pub mod endpoint;
pub mod envelope;
pub mod format;
pub mod model;
pub mod search;
pub mod validate;

pub use endpoint::FlightEndpoint;
pub use envelope::{ApiError, ApiResponse, PageResponse};
pub use format::{DateFormat, format_flight_date, status_label, to_datetime_input};
pub use model::{CreateFlightRequest, Flight, FlightStatus, UpdateFlightRequest};
pub use search::FlightSearchRequest;
pub use validate::{FieldError, FlightField};
