//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: it holds the page model in a
//! signal, issues API calls from event handlers, and delegates rendering
//! details to `components`.

pub mod flight_form;
pub mod flight_list;
