// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar-date parsing and formatting.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer};

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Format a calendar date as ISO-8601 (`YYYY-MM-DD`).
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Parse a calendar date from `YYYY-MM-DD`, an RFC 3339 timestamp, or a
/// timestamp without offset (`2024-05-01T00:00:00`).
///
/// Timestamps keep the date as written, ignoring any offset.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, NAIVE_DATETIME_FORMAT)
                .ok()
                .map(|dt| dt.date())
        })
}

/// Serde adapter emitting a date as `YYYY-MM-DD`.
pub fn serialize_calendar_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_iso_date(*date))
}

/// Serde adapter for date fields that may hold a stored timestamp.
pub fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "invalid date {:?}, expected YYYY-MM-DD",
            raw
        ))
    })
}
