// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Serde adapters for integer fields that also accept integral floats.
//!
//! `30` and `30.0` are the same duration; `30.5` and `"30"` are rejected.

use serde::de::{self, Deserialize, Deserializer, Visitor};
use std::fmt;

/// Largest float magnitude that converts to `i64` without loss.
const MAX_EXACT_F64: f64 = 9_007_199_254_740_992.0;

struct WholeNumber(i64);

struct WholeNumberVisitor;

impl Visitor<'_> for WholeNumberVisitor {
    type Value = WholeNumber;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a whole number")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(WholeNumber(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v)
            .map(WholeNumber)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if v.fract() == 0.0 && v.abs() <= MAX_EXACT_F64 {
            Ok(WholeNumber(v as i64))
        } else {
            Err(E::invalid_value(de::Unexpected::Float(v), &self))
        }
    }
}

impl<'de> Deserialize<'de> for WholeNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_i64(WholeNumberVisitor)
    }
}

pub fn deserialize_whole<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    WholeNumber::deserialize(deserializer).map(|n| n.0)
}

/// Optional variant; `null` is `None`.
pub fn deserialize_opt_whole<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<WholeNumber>::deserialize(deserializer).map(|n| n.map(|n| n.0))
}
