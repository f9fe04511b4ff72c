// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod document;
pub mod metric;
pub mod number;
pub mod workout;

pub use document::{CreatedResponse, StoredDocument};
pub use metric::Metric;
pub use workout::{Workout, WorkoutType};
