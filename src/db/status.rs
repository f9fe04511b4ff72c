// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Store health as reported by the diagnostics endpoint.

/// Longest error excerpt included in a status label.
const MAX_ERROR_CHARS: usize = 50;

/// Outcome of probing the document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseStatus {
    /// Connected and able to enumerate collections.
    Working { collections: Vec<String> },
    /// Connected, but enumerating collections failed.
    Degraded { error: String },
    /// Configured, but no client could be constructed.
    Uninitialized,
    /// No store configured.
    Unavailable,
}

impl DatabaseStatus {
    /// Human-readable description for the `database` field.
    pub fn label(&self) -> String {
        match self {
            DatabaseStatus::Working { .. } => "✅ Connected & Working".to_string(),
            DatabaseStatus::Degraded { error } => {
                let excerpt: String = error.chars().take(MAX_ERROR_CHARS).collect();
                format!("⚠️  Connected but Error: {}", excerpt)
            }
            DatabaseStatus::Uninitialized => "⚠️  Available but not initialized".to_string(),
            DatabaseStatus::Unavailable => "❌ Not Available".to_string(),
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(
            self,
            DatabaseStatus::Working { .. } | DatabaseStatus::Degraded { .. }
        )
    }

    pub fn connection_status(&self) -> &'static str {
        if self.is_connected() {
            "Connected"
        } else {
            "Not Connected"
        }
    }

    /// Collection sample; empty unless the probe fully succeeded.
    pub fn collections(&self) -> &[String] {
        match self {
            DatabaseStatus::Working { collections } => collections,
            _ => &[],
        }
    }
}
