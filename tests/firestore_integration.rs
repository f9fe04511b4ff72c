// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore integration tests.
//!
//! These tests require the Firestore emulator to be running and
//! FIRESTORE_EMULATOR_HOST to point at it.

use chrono::NaiveDate;
use fitness_tracker::db::{DatabaseStatus, DocumentFilter};
use fitness_tracker::models::{Metric, StoredDocument, Workout, WorkoutType};

mod common;
use common::test_db;

/// Collection name unique to one test run, so tests do not see each other's data.
fn unique_collection(prefix: &str) -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}_{}", prefix, nanos)
}

fn test_workout(duration_min: i64) -> Workout {
    Workout {
        date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        workout_type: WorkoutType::Strength,
        duration_min,
        calories: Some(300),
        notes: Some("emulator".to_string()),
    }
}

#[tokio::test]
async fn test_workout_round_trip() {
    require_emulator!();

    let db = test_db().await;
    let collection = unique_collection("workout");

    let id = db
        .create_document(&collection, &test_workout(42))
        .await
        .unwrap();
    assert!(!id.is_empty());

    let docs: Vec<StoredDocument<Workout>> = db
        .get_documents(&collection, DocumentFilter::All, 50)
        .await
        .unwrap();
    assert_eq!(docs, vec![StoredDocument::new(id, test_workout(42))]);
}

#[tokio::test]
async fn test_metric_round_trip_keeps_date() {
    require_emulator!();

    let db = test_db().await;
    let collection = unique_collection("metric");
    let metric = Metric {
        date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        weight_kg: Some(80.25),
        body_fat_pct: None,
        resting_hr: Some(58),
    };

    db.create_document(&collection, &metric).await.unwrap();

    let docs: Vec<StoredDocument<Metric>> = db
        .get_documents(&collection, DocumentFilter::All, 50)
        .await
        .unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].record, metric);
}

#[tokio::test]
async fn test_limit_and_stable_reads() {
    require_emulator!();

    let db = test_db().await;
    let collection = unique_collection("workout");
    for minutes in 1..=5 {
        db.create_document(&collection, &test_workout(minutes))
            .await
            .unwrap();
    }

    let two: Vec<StoredDocument<Workout>> = db
        .get_documents(&collection, DocumentFilter::All, 2)
        .await
        .unwrap();
    assert_eq!(two.len(), 2);

    let first: Vec<StoredDocument<Workout>> = db
        .get_documents(&collection, DocumentFilter::All, 50)
        .await
        .unwrap();
    let second: Vec<StoredDocument<Workout>> = db
        .get_documents(&collection, DocumentFilter::All, 50)
        .await
        .unwrap();
    assert_eq!(first.len(), 5);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_probe_reports_working() {
    require_emulator!();

    let db = test_db().await;
    db.create_document(&unique_collection("probe"), &test_workout(5))
        .await
        .unwrap();

    match db.probe().await {
        DatabaseStatus::Working { collections } => {
            assert!(!collections.is_empty());
            assert!(collections.len() <= 10);
        }
        other => panic!("unexpected status: {:?}", other),
    }
}
