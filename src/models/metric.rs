// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Body metric model for storage and API.

use crate::models::number::deserialize_opt_whole;
use crate::time_utils::{deserialize_calendar_date, serialize_calendar_date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body measurements taken on one day, stored in the `metric` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Metric {
    /// Date of the measurement
    #[serde(
        serialize_with = "serialize_calendar_date",
        deserialize_with = "deserialize_calendar_date"
    )]
    pub date: NaiveDate,
    /// Weight in kilograms
    #[serde(default)]
    #[validate(range(min = 0.0, message = "weight_kg must be non-negative"))]
    pub weight_kg: Option<f64>,
    /// Body fat percentage
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0, message = "body_fat_pct must be between 0 and 100"))]
    pub body_fat_pct: Option<f64>,
    /// Resting heart rate (bpm)
    #[serde(default, deserialize_with = "deserialize_opt_whole")]
    #[validate(range(min = 0, max = 300, message = "resting_hr must be between 0 and 300"))]
    pub resting_hr: Option<i64>,
}
