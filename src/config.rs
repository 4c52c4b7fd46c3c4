//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_FLIGHT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_FLIGHT_API_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("FLIGHT_API_URL must start with http:// or https://, got {0:?}")]
    InvalidApiUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Remote API root, without a trailing slash. `/flights/...` is appended.
    pub api_url: String,
    pub timeout: Duration,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `FLIGHT_API_URL`: default `http://localhost:8080/api`
    /// - `FLIGHT_API_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] when the API URL is not http(s).
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var("FLIGHT_API_URL").unwrap_or_else(|_| DEFAULT_FLIGHT_API_URL.to_owned());
        let api_url = raw.trim().trim_end_matches('/').to_owned();
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidApiUrl(raw));
        }
        let timeout = Duration::from_secs(env_parse_u64("FLIGHT_API_TIMEOUT_SECS", DEFAULT_FLIGHT_API_TIMEOUT_SECS));
        Ok(Self { api_url, timeout })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}
