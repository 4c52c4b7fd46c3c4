//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no flight data of its own; it holds the upstream location and
//! one pooled HTTP client reused by every proxied request.

use crate::config::HostConfig;

/// Clone is required by Axum; `reqwest::Client` is internally reference
/// counted.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: HostConfig,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: HostConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }
}
