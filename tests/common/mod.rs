// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
};
use fitness_tracker::config::Config;
use fitness_tracker::db::DocumentStore;
use fitness_tracker::routes::create_router;
use fitness_tracker::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Connect to the Firestore emulator.
#[allow(dead_code)]
pub async fn test_db() -> DocumentStore {
    let config = Config {
        database_url: None,
        ..Config::test_default()
    };
    DocumentStore::connect(&config).await
}

/// Create a test app backed by the in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    build_app(Config::test_default(), DocumentStore::in_memory())
}

/// Create a test app whose store is unreachable.
#[allow(dead_code)]
pub fn create_offline_app() -> (axum::Router, Arc<AppState>) {
    build_app(Config::test_default(), DocumentStore::uninitialized())
}

#[allow(dead_code)]
pub fn build_app(config: Config, db: DocumentStore) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState { config, db });
    (create_router(state.clone()), state)
}

/// POST a JSON body.
#[allow(dead_code)]
pub async fn post_json(app: &axum::Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// GET a path.
#[allow(dead_code)]
pub async fn get(app: &axum::Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// POST a payload that must succeed and return the new ID.
#[allow(dead_code)]
pub async fn create_ok(app: &axum::Router, uri: &str, body: serde_json::Value) -> String {
    let response = post_json(app, uri, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["id"].as_str().expect("id should be a string").to_string()
}
