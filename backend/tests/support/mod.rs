#![allow(dead_code)]
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use acme_admin_backend::{build_router, config::Config, state::AppState, store::Store};

pub const ADMIN_TOKEN: &str = "mock-token-1";

pub fn test_config() -> Config {
    Config::default()
}

/// State over the seed data, kept so tests can inspect the store directly.
pub fn seeded_state() -> AppState {
    AppState::new(Store::seeded(Utc::now()), test_config())
}

pub fn app(state: &AppState) -> Router {
    build_router(state.clone())
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Value,
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("build request"),
        None => builder.body(Body::empty()).expect("build request"),
    };

    let response = app.clone().oneshot(request).await.expect("call router");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).to_string(),
        ))
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: &Router, uri: &str, token: &str) -> TestResponse {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: &Router, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
    send(app, Method::POST, uri, token, Some(body)).await
}

pub async fn put_json(app: &Router, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
    send(app, Method::PUT, uri, token, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str, token: Option<&str>) -> TestResponse {
    send(app, Method::DELETE, uri, token, None).await
}

/// Number of audit entries currently in the store.
pub async fn audit_len(state: &AppState) -> usize {
    state.store.read().await.audit_logs.len()
}

/// Action name of the newest audit entry.
pub async fn last_audit_action(state: &AppState) -> Option<String> {
    let store = state.store.read().await;
    store
        .audit_logs
        .last()
        .map(|entry| entry.action.as_str().to_string())
}
