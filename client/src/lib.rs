//! # client
//!
//! Leptos + WASM admin UI for flight records.
//!
//! Pages own route-level orchestration, `state` holds the pure form/list
//! models they drive, `components` renders reusable pieces, and `net::api`
//! talks to the flight API through the host's `/api` proxy. Domain types,
//! validation, and formatting come from the shared `flights` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
