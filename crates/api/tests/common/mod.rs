#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use trackvault_api::config::ServerConfig;
use trackvault_api::middleware::caller::CALLER_HEADER;
use trackvault_api::router::build_app_router;
use trackvault_api::state::AppState;
use trackvault_events::{EventBus, EventJournal};

pub const ADMIN: &str = "admin";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        registry_admin: ADMIN.to_string(),
        journal_capacity: 100,
    }
}

/// Build the full application router plus its state, with a fresh registry.
pub fn build_test_app() -> (Router, AppState) {
    let config = test_config();
    let event_bus = Arc::new(EventBus::default());
    let journal = EventJournal::new(config.journal_capacity);
    let state = AppState::new(&config, event_bus, journal);
    (build_app_router(state.clone(), &config), state)
}

/// Send a request with an optional caller identity and optional JSON body.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    caller: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(caller) = caller {
        builder = builder.header(CALLER_HEADER, caller);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    caller: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(caller), Some(body)).await
}

pub async fn put_json(
    app: Router,
    uri: &str,
    caller: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(caller), Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Mint an asset as `caller` and return its id.
pub async fn mint(app: Router, caller: &str, content_ref: &str) -> u64 {
    let response = post_json(
        app,
        "/api/v1/assets",
        caller,
        serde_json::json!({ "content_ref": content_ref, "title": "Track", "description": "Demo" }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_u64().unwrap()
}
