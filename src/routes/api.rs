// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for workouts and body metrics.

use crate::db::{collections, DocumentFilter};
use crate::error::Result;
use crate::models::{CreatedResponse, Metric, StoredDocument, Workout};
use crate::validation::ValidatedJson;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use axum_extra::extract::WithRejection;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/workouts", get(list_workouts).post(add_workout))
        .route("/api/metrics", get(list_metrics).post(add_metric))
}

#[derive(Deserialize)]
struct ListQuery {
    /// Maximum number of documents to return
    #[serde(default = "default_limit")]
    limit: u32,
}

fn default_limit() -> u32 {
    50
}

const MAX_LIMIT: u32 = 1000;

type ListParams = WithRejection<Query<ListQuery>, crate::error::AppError>;

// ─── Workouts ────────────────────────────────────────────────

async fn add_workout(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<Workout>,
) -> Result<Json<CreatedResponse>> {
    let id = create(&state, collections::WORKOUTS, &payload).await?;
    tracing::info!(
        id = %id,
        workout_type = payload.workout_type.as_str(),
        duration_min = payload.duration_min,
        "Workout recorded"
    );
    Ok(Json(CreatedResponse { id }))
}

async fn list_workouts(
    State(state): State<Arc<AppState>>,
    WithRejection(Query(query), _): ListParams,
) -> Result<Json<Vec<StoredDocument<Workout>>>> {
    list(&state, collections::WORKOUTS, query.limit).await
}

// ─── Metrics ─────────────────────────────────────────────────

async fn add_metric(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<Metric>,
) -> Result<Json<CreatedResponse>> {
    let id = create(&state, collections::METRICS, &payload).await?;
    tracing::info!(id = %id, date = %payload.date, "Metric recorded");
    Ok(Json(CreatedResponse { id }))
}

async fn list_metrics(
    State(state): State<Arc<AppState>>,
    WithRejection(Query(query), _): ListParams,
) -> Result<Json<Vec<StoredDocument<Metric>>>> {
    list(&state, collections::METRICS, query.limit).await
}

// ─── Shared ──────────────────────────────────────────────────

async fn create<T>(state: &AppState, collection: &str, record: &T) -> Result<String>
where
    T: Serialize + DeserializeOwned + Sync + Send,
{
    state.db.create_document(collection, record).await
}

async fn list<T>(
    state: &AppState,
    collection: &str,
    limit: u32,
) -> Result<Json<Vec<StoredDocument<T>>>>
where
    T: DeserializeOwned,
{
    let limit = limit.min(MAX_LIMIT);
    let docs = state
        .db
        .get_documents(collection, DocumentFilter::All, limit)
        .await?;
    tracing::debug!(collection, limit, count = docs.len(), "Listed documents");
    Ok(Json(docs))
}
