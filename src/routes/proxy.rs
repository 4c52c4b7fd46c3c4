//! Same-origin proxy to the remote flight API.
//!
//! DESIGN
//! ======
//! `/api/flights/{*rest}` maps one-to-one onto `{FLIGHT_API_URL}/flights/{rest}`.
//! Method, query string, `Content-Type`, and body are forwarded verbatim;
//! the upstream status and body are relayed back untouched so the browser
//! sees the API's own envelopes and error messages.
//!
//! ERROR HANDLING
//! ==============
//! Only transport failures are handled here. They become a JSON body shaped
//! like the API's failure envelope (`success: false`, `message`) with 502 or
//! 504, so the UI can surface them the same way as API errors.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("flight API did not respond in time")]
    Timeout,
    #[error("flight API is unreachable")]
    Unreachable,
    #[error("flight API request failed: {0}")]
    Upstream(String),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Unreachable | Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Unreachable
        } else {
            Self::Upstream(err.to_string())
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "success": false, "message": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

/// Upstream URL for a proxied path and optional raw query string.
pub(crate) fn upstream_url(api_url: &str, rest: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/flights/{}", api_url.trim_end_matches('/'), rest.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// `ANY /api/flights/{*rest}`: forward to the remote flight API.
pub async fn forward(
    State(state): State<AppState>,
    Path(rest): Path<String>,
    method: Method,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.config.api_url, &rest, query.as_deref());

    let mut request = state.http.request(method.clone(), &url);
    if let Some(content_type) = headers.get(CONTENT_TYPE) {
        request = request.header(CONTENT_TYPE, content_type.clone());
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await.map_err(|e| {
        tracing::warn!(%method, %url, error = %e, "flight API request failed");
        ProxyError::from(e)
    })?;

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await.map_err(|e| {
        tracing::warn!(%method, %url, error = %e, "flight API body read failed");
        ProxyError::from(e)
    })?;

    if status.is_server_error() {
        tracing::warn!(%method, %url, %status, "flight API returned server error");
    } else {
        tracing::debug!(%method, %url, %status, "proxied");
    }

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    Ok(response)
}
