// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Liveness and store diagnostics routes.

use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        .route("/test", get(test_database))
}

#[derive(Serialize)]
pub struct RootResponse {
    pub message: String,
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Fitness Tracker Backend Running".to_string(),
    })
}

/// Store diagnostics. Always answers 200; faults are described, not raised.
#[derive(Serialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

fn presence(value: &Option<String>) -> String {
    if value.is_some() { "✅ Set" } else { "❌ Not Set" }.to_string()
}

async fn test_database(State(state): State<Arc<AppState>>) -> Json<DiagnosticsResponse> {
    let status = state.db.probe().await;
    tracing::info!(connected = status.is_connected(), "Store probe complete");

    Json(DiagnosticsResponse {
        backend: "✅ Running".to_string(),
        database: status.label(),
        database_url: presence(&state.config.database_url),
        database_name: presence(&state.config.database_name),
        connection_status: status.connection_status().to_string(),
        collections: status.collections().to_vec(),
    })
}
