// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Fitness Tracker: record workouts and body metrics.
//!
//! This crate provides a small JSON API that validates workout and metric
//! submissions and stores them in a document database.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod time_utils;
pub mod validation;

use config::Config;
use db::DocumentStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: DocumentStore,
}
