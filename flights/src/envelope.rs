//! Response envelope, pagination payload, and API error type.
//!
//! ERROR HANDLING
//! ==============
//! Read endpoints wrap their payload in [`ApiResponse`]; a `success: false`
//! envelope is turned into [`ApiError::Envelope`] carrying the server
//! message. Mutation endpoints return bare bodies, so their failures arrive
//! as non-2xx statuses and become [`ApiError::Status`]. UI code never shows
//! raw errors; it asks [`ApiError::user_message`] for text, passing the
//! fallback for the operation that failed.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::{Deserialize, Serialize};

/// Success/message/data/errorCode/timestamp wrapper used by read endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload of a successful envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Envelope`] when `success` is false or `data` is
    /// missing. The server message is used when present, otherwise
    /// `fallback`.
    pub fn into_data(self, fallback: &str) -> Result<T, ApiError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(ApiError::Envelope {
                message: non_empty(self.message).unwrap_or_else(|| fallback.to_owned()),
                code: self.error_code,
            }),
        }
    }
}

/// Offset-pagination payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    /// Zero-based index of this page.
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}

/// Failure talking to the flight API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, SSR stub).
    #[error("request failed: {0}")]
    Transport(String),
    /// Non-2xx status. `message` comes from the JSON error body if any.
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },
    /// The envelope reported `success: false`.
    #[error("{message}")]
    Envelope { message: String, code: Option<String> },
    /// The body could not be decoded into the expected type.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error, pulling `message` out of a JSON error body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, message: error_body_message(body) }
    }

    /// Text to show the user: the server's own message when there is one,
    /// otherwise `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } | Self::Envelope { message, .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Extract a non-empty `message` string from a JSON error body.
#[must_use]
pub fn error_body_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = value.get("message")?.as_str()?;
    non_empty(Some(message.to_owned()))
}

fn non_empty(message: Option<String>) -> Option<String> {
    message.filter(|m| !m.trim().is_empty())
}
