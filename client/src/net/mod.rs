//! Networking for the flight API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only talks to its own origin. `api` issues requests against
//! `/api/flights/...`, which the host forwards to the configured upstream.

pub mod api;
