// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout model for storage and API.

use crate::models::number::{deserialize_opt_whole, deserialize_whole};
use crate::time_utils::{deserialize_calendar_date, serialize_calendar_date};
use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Workout category. Matched case-sensitively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum WorkoutType {
    #[default]
    Cardio,
    Strength,
    #[serde(rename = "HIIT")]
    Hiit,
    Yoga,
    Pilates,
    Sports,
    Other,
}

const WORKOUT_TYPE_NAMES: &[&str] = &[
    "Cardio", "Strength", "HIIT", "Yoga", "Pilates", "Sports", "Other",
];

impl WorkoutType {
    /// All categories, in declaration order.
    pub const ALL: [WorkoutType; 7] = [
        WorkoutType::Cardio,
        WorkoutType::Strength,
        WorkoutType::Hiit,
        WorkoutType::Yoga,
        WorkoutType::Pilates,
        WorkoutType::Sports,
        WorkoutType::Other,
    ];

    /// Wire name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Cardio => "Cardio",
            WorkoutType::Strength => "Strength",
            WorkoutType::Hiit => "HIIT",
            WorkoutType::Yoga => "Yoga",
            WorkoutType::Pilates => "Pilates",
            WorkoutType::Sports => "Sports",
            WorkoutType::Other => "Other",
        }
    }
}

// Read through a string so a non-string value is a type error on the field,
// not a malformed-enum error.
impl<'de> Deserialize<'de> for WorkoutType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        WorkoutType::ALL
            .into_iter()
            .find(|t| t.as_str() == raw)
            .ok_or_else(|| de::Error::unknown_variant(&raw, WORKOUT_TYPE_NAMES))
    }
}

/// A workout session, stored in the `workout` collection.
///
/// Clients send the category as `type`; it is stored and returned as
/// `workout_type`. Both keys are accepted on input and `type` wins when
/// both are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(from = "WorkoutFields")]
pub struct Workout {
    /// Date of the workout
    #[serde(serialize_with = "serialize_calendar_date")]
    pub date: NaiveDate,
    /// Workout category
    pub workout_type: WorkoutType,
    /// Duration in minutes
    #[validate(range(min = 1, max = 1440, message = "duration_min must be between 1 and 1440"))]
    pub duration_min: i64,
    /// Estimated calories burned
    #[validate(range(min = 0, message = "calories must be non-negative"))]
    pub calories: Option<i64>,
    /// Free-form notes about the session
    pub notes: Option<String>,
}

/// Wire shape of a workout, with both category keys kept apart.
#[derive(Deserialize)]
struct WorkoutFields {
    #[serde(deserialize_with = "deserialize_calendar_date")]
    date: NaiveDate,
    #[serde(rename = "type", default, deserialize_with = "present_category")]
    category: Option<WorkoutType>,
    #[serde(default, deserialize_with = "present_category")]
    workout_type: Option<WorkoutType>,
    #[serde(deserialize_with = "deserialize_whole")]
    duration_min: i64,
    #[serde(default, deserialize_with = "deserialize_opt_whole")]
    calories: Option<i64>,
    #[serde(default)]
    notes: Option<String>,
}

/// A category key that is present must hold a category; `null` is rejected.
fn present_category<'de, D>(deserializer: D) -> Result<Option<WorkoutType>, D::Error>
where
    D: Deserializer<'de>,
{
    WorkoutType::deserialize(deserializer).map(Some)
}

impl From<WorkoutFields> for Workout {
    fn from(fields: WorkoutFields) -> Self {
        Self {
            date: fields.date,
            workout_type: fields
                .category
                .or(fields.workout_type)
                .unwrap_or_default(),
            duration_min: fields.duration_min,
            calories: fields.calories,
            notes: fields.notes,
        }
    }
}
