// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! Built once in `main` and handed to the document store; nothing reads the
//! environment after startup.

use std::env;

/// `DATABASE_URL` value selecting the process-local document store.
pub const MEMORY_DATABASE_URL: &str = "memory://";

const DEFAULT_PORT: u16 = 8000;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Document store endpoint (Firestore emulator URL or `memory://`)
    pub database_url: Option<String>,
    /// Document store name (the Firestore project ID)
    pub database_name: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            database_url: non_empty_var("DATABASE_URL"),
            database_name: non_empty_var("DATABASE_NAME"),
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: Some(MEMORY_DATABASE_URL.to_string()),
            database_name: Some("test-project".to_string()),
        }
    }

    /// Whether the process-local store was requested.
    pub fn uses_memory_store(&self) -> bool {
        self.database_url.as_deref() == Some(MEMORY_DATABASE_URL)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}
