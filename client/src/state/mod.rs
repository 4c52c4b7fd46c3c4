//! Page state models.
//!
//! DESIGN
//! ======
//! Each page keeps one plain struct in an `RwSignal`. Event handlers call
//! methods on it that mutate state and return what request, if any, to
//! issue next, so every transition is testable without a browser.

pub mod flight_form;
pub mod flight_list;
pub mod search;
pub mod toast;
