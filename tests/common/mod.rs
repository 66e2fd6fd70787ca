//! Shared helpers for the HTTP integration tests.
//!
//! Every app gets its own in-memory store, so tests never see each other's
//! data.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot`

use shop_api::config::AppConfig;
use shop_api::lookup::NotFoundPolicy;
use shop_api::router::create_app_router;
use shop_api::state::AppState;

/// Create a test app with the default (legacy) configuration
pub async fn create_test_app() -> Router {
    create_test_app_with(AppConfig::default()).await
}

/// Create a test app answering absent entities with uniform 400/404
pub async fn create_strict_app() -> Router {
    create_test_app_with(AppConfig {
        not_found_policy: NotFoundPolicy::Strict,
        ..AppConfig::default()
    })
    .await
}

pub async fn create_test_app_with(config: AppConfig) -> Router {
    let state = AppState::connect(config).await.unwrap();
    create_app_router(state)
}

/// Send a request and return the status with the raw body text
pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder.body(body.into()).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, String::from_utf8(body_bytes.to_vec()).unwrap())
}

/// Send a JSON request and get the response as JSON (`{}` for empty bodies)
pub async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let (status, text) = send_raw(
        app,
        method,
        uri,
        Some("application/json"),
        serde_json::to_string(&body).unwrap(),
    )
    .await;

    (status, serde_json::from_str(&text).unwrap_or(json!({})))
}

/// Send a request without a body and get the response as JSON
pub async fn send_empty(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let (status, text) = send_raw(app, method, uri, None, Body::empty()).await;
    (status, serde_json::from_str(&text).unwrap_or(json!({})))
}

/// Decode a response body into one of the crate's models
pub fn decode<T: DeserializeOwned>(body: Value) -> T {
    serde_json::from_value(body).unwrap()
}

/// POST /categories and return the new id
pub async fn create_category(app: &Router, name: &str) -> i64 {
    let (status, body) = send_json(app, "POST", "/categories", json!({ "name": name })).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

/// POST /products and return the new id
pub async fn create_product(app: &Router, payload: Value) -> i64 {
    let (status, body) = send_json(app, "POST", "/products", payload).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

/// POST /carts and return the new id
pub async fn create_cart(app: &Router) -> i64 {
    let (status, body) = send_empty(app, "POST", "/carts").await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}
