// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-facing view of stored documents.

use serde::Serialize;

/// A stored record paired with its store-assigned identifier.
///
/// Serializes as the record's own fields plus a string `id`, which is the
/// shape returned by the list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredDocument<T> {
    pub id: String,
    #[serde(flatten)]
    pub record: T,
}

impl<T> StoredDocument<T> {
    pub fn new(id: impl Into<String>, record: T) -> Self {
        Self {
            id: id.into(),
            record,
        }
    }
}

/// Response for a newly created document.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}
