use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::routing::{delete, get, patch, post};
use serde_json::{Value, json};

use super::*;
use crate::config::HostConfig;

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Stand-in for the remote flight API, mounted under `/api`.
fn fake_api() -> Router {
    Router::new()
        .route(
            "/api/flights/get/{id}",
            get(|Path(id): Path<i64>| async move {
                Json(json!({ "success": true, "data": { "id": id, "flightNumber": "KL1002" } }))
            }),
        )
        .route("/api/flights/search", get(|RawQuery(query): RawQuery| async move { query.unwrap_or_default() }))
        .route(
            "/api/flights/create",
            post(|headers: HeaderMap, body: String| async move {
                let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()).unwrap_or_default().to_owned();
                (StatusCode::CREATED, Json(json!({ "contentType": content_type, "body": body })))
            }),
        )
        .route(
            "/api/flights/update/{id}",
            patch(|| async {
                (StatusCode::BAD_REQUEST, Json(json!({ "success": false, "message": "Gate already assigned" })))
            }),
        )
        .route("/api/flights/delete/{id}", delete(|| async { StatusCode::NO_CONTENT }))
}

async fn host_for(api_url: String) -> SocketAddr {
    let config = HostConfig { api_url, timeout: Duration::from_secs(5) };
    let state = AppState::new(config).unwrap();
    serve(crate::routes::api_routes(state)).await
}

async fn host_with_fake_api() -> SocketAddr {
    let upstream = serve(fake_api()).await;
    host_for(format!("http://{upstream}/api/")).await
}

// =============================================================
// URL mapping
// =============================================================

#[test]
fn upstream_url_joins_root_and_rest() {
    assert_eq!(upstream_url("http://api.test/api", "get/7", None), "http://api.test/api/flights/get/7");
    assert_eq!(upstream_url("http://api.test/api/", "/getall", None), "http://api.test/api/flights/getall");
}

#[test]
fn upstream_url_appends_query_only_when_present() {
    assert_eq!(
        upstream_url("http://api.test/api", "search", Some("page=0&size=10&status=DELAYED")),
        "http://api.test/api/flights/search?page=0&size=10&status=DELAYED"
    );
    assert_eq!(upstream_url("http://api.test/api", "getall", Some("")), "http://api.test/api/flights/getall");
}

#[test]
fn proxy_error_status_codes() {
    assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(ProxyError::Unreachable.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::Upstream("reset".to_owned()).status(), StatusCode::BAD_GATEWAY);
}

// =============================================================
// Forwarding
// =============================================================

#[tokio::test]
async fn get_is_relayed_with_body() {
    let host = host_with_fake_api().await;
    let resp = reqwest::get(format!("http://{host}/api/flights/get/7")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], 7);
}

#[tokio::test]
async fn query_string_is_forwarded_verbatim() {
    let host = host_with_fake_api().await;
    let text = reqwest::get(format!("http://{host}/api/flights/search?page=1&size=10&airline=KLM"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(text, "page=1&size=10&airline=KLM");
}

#[tokio::test]
async fn post_forwards_body_and_content_type() {
    let host = host_with_fake_api().await;
    let resp = reqwest::Client::new()
        .post(format!("http://{host}/api/flights/create"))
        .json(&json!({ "airline": "KLM" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["contentType"], "application/json");
    assert_eq!(body["body"], r#"{"airline":"KLM"}"#);
}

#[tokio::test]
async fn upstream_error_status_and_message_are_relayed() {
    let host = host_with_fake_api().await;
    let resp = reqwest::Client::new()
        .patch(format!("http://{host}/api/flights/update/3"))
        .json(&json!({ "gate": "A1" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Gate already assigned");
}

#[tokio::test]
async fn delete_relays_empty_response() {
    let host = host_with_fake_api().await;
    let resp = reqwest::Client::new().delete(format!("http://{host}/api/flights/delete/3")).send().await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway_envelope() {
    let closed = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let host = host_for(format!("http://{closed}/api")).await;

    let resp = reqwest::get(format!("http://{host}/api/flights/getall")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_GATEWAY);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "flight API is unreachable");
}

#[tokio::test]
async fn healthz_is_ok() {
    let host = host_for("http://127.0.0.1:9/api".to_owned()).await;
    let resp = reqwest::get(format!("http://{host}/healthz")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}
