// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Document store gateway.
//!
//! [`DocumentStore`] is the only path to persisted records. It wraps one of:
//! - Firestore (production, or the emulator)
//! - a process-local store (`DATABASE_URL=memory://`, also used by tests)
//! - nothing at all, in which case every operation fails

pub mod firestore;
pub mod memory;
pub mod status;

pub use self::firestore::FirestoreClient;
pub use memory::MemoryStore;
pub use status::DatabaseStatus;

use crate::config::Config;
use crate::error::AppError;
use crate::models::StoredDocument;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// Collection names as constants.
pub mod collections {
    pub const WORKOUTS: &str = "workout";
    pub const METRICS: &str = "metric";
}

/// Most collection names reported by [`DocumentStore::probe`].
pub const PROBE_COLLECTION_LIMIT: usize = 10;

/// Which documents a listing returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocumentFilter {
    #[default]
    All,
}

#[derive(Clone)]
enum Backend {
    Firestore(FirestoreClient),
    Memory(Arc<MemoryStore>),
    Offline { configured: bool },
}

/// Handle to the document store, cheap to clone.
#[derive(Clone)]
pub struct DocumentStore {
    backend: Backend,
}

impl DocumentStore {
    /// Build the store selected by `config`.
    ///
    /// Never fails: a store that cannot be reached leaves the service running
    /// in offline mode so diagnostics can report the problem.
    pub async fn connect(config: &Config) -> Self {
        if config.uses_memory_store() {
            tracing::info!("Using in-memory document store");
            return Self::in_memory();
        }

        let Some(project_id) = config.database_name.as_deref() else {
            tracing::warn!("DATABASE_NAME not set, running without a document store");
            return Self::new_mock();
        };

        match FirestoreClient::connect(project_id, config.database_url.as_deref()).await {
            Ok(client) => Self {
                backend: Backend::Firestore(client),
            },
            Err(e) => {
                tracing::error!(error = %e, "Document store unavailable, running offline");
                Self::uninitialized()
            }
        }
    }

    /// Create an empty process-local store.
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(Arc::new(MemoryStore::default())),
        }
    }

    /// Create a store with no backend (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self {
            backend: Backend::Offline { configured: false },
        }
    }

    /// Offline store for a configured backend whose client failed to start.
    pub fn uninitialized() -> Self {
        Self {
            backend: Backend::Offline { configured: true },
        }
    }

    /// Store `record` in `collection` and return its new ID.
    pub async fn create_document<T>(&self, collection: &str, record: &T) -> Result<String, AppError>
    where
        T: Serialize + DeserializeOwned + Sync + Send,
    {
        let id = match &self.backend {
            Backend::Firestore(client) => client.insert(collection, record).await?,
            Backend::Memory(store) => store.insert(collection, record)?,
            Backend::Offline { .. } => return Err(offline_error()),
        };

        tracing::debug!(collection, id = %id, "Document created");
        Ok(id)
    }

    /// Fetch up to `limit` documents from `collection` in store order.
    ///
    /// Stored documents are trusted; one that no longer fits `T` is skipped
    /// rather than failing the whole listing.
    pub async fn get_documents<T>(
        &self,
        collection: &str,
        filter: DocumentFilter,
        limit: u32,
    ) -> Result<Vec<StoredDocument<T>>, AppError>
    where
        T: DeserializeOwned,
    {
        if limit == 0 {
            return Ok(Vec::new());
        }

        match filter {
            DocumentFilter::All => match &self.backend {
                Backend::Firestore(client) => client.list(collection, limit).await,
                Backend::Memory(store) => store.list(collection, limit),
                Backend::Offline { .. } => Err(offline_error()),
            },
        }
    }

    /// Check reachability by enumerating collections. Faults become status.
    pub async fn probe(&self) -> DatabaseStatus {
        match &self.backend {
            Backend::Firestore(client) => {
                match client.collection_ids(PROBE_COLLECTION_LIMIT).await {
                    Ok(mut collections) => {
                        collections.truncate(PROBE_COLLECTION_LIMIT);
                        DatabaseStatus::Working { collections }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Store probe failed");
                        DatabaseStatus::Degraded {
                            error: e.to_string(),
                        }
                    }
                }
            }
            Backend::Memory(store) => DatabaseStatus::Working {
                collections: store.collection_ids(PROBE_COLLECTION_LIMIT),
            },
            Backend::Offline { configured: true } => DatabaseStatus::Uninitialized,
            Backend::Offline { configured: false } => DatabaseStatus::Unavailable,
        }
    }
}

fn offline_error() -> AppError {
    AppError::Database("Database not connected (offline mode)".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Metric, Workout, WorkoutType};
    use chrono::NaiveDate;

    fn workout(duration_min: i64) -> Workout {
        Workout {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            workout_type: WorkoutType::Cardio,
            duration_min,
            calories: Some(250),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_list_round_trip() {
        let db = DocumentStore::in_memory();
        let id = db
            .create_document(collections::WORKOUTS, &workout(30))
            .await
            .unwrap();

        let docs: Vec<StoredDocument<Workout>> = db
            .get_documents(collections::WORKOUTS, DocumentFilter::All, 50)
            .await
            .unwrap();

        assert_eq!(docs, vec![StoredDocument::new(id, workout(30))]);
    }

    #[tokio::test]
    async fn test_collections_are_separate() {
        let db = DocumentStore::in_memory();
        db.create_document(collections::WORKOUTS, &workout(10))
            .await
            .unwrap();

        let metrics: Vec<StoredDocument<Metric>> = db
            .get_documents(collections::METRICS, DocumentFilter::All, 50)
            .await
            .unwrap();
        assert!(metrics.is_empty());
    }

    #[tokio::test]
    async fn test_zero_limit_returns_nothing() {
        let db = DocumentStore::in_memory();
        db.create_document(collections::WORKOUTS, &workout(10))
            .await
            .unwrap();

        let docs: Vec<StoredDocument<Workout>> = db
            .get_documents(collections::WORKOUTS, DocumentFilter::All, 0)
            .await
            .unwrap();
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn test_offline_store_fails_every_operation() {
        let db = DocumentStore::new_mock();

        let err = db
            .create_document(collections::WORKOUTS, &workout(10))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Database(_)));

        let err = db
            .get_documents::<Workout>(collections::WORKOUTS, DocumentFilter::All, 5)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }

    #[tokio::test]
    async fn test_probe_states() {
        assert_eq!(
            DocumentStore::new_mock().probe().await,
            DatabaseStatus::Unavailable
        );
        assert_eq!(
            DocumentStore::uninitialized().probe().await,
            DatabaseStatus::Uninitialized
        );

        let db = DocumentStore::in_memory();
        db.create_document(collections::METRICS, &1).await.unwrap();
        assert_eq!(
            db.probe().await,
            DatabaseStatus::Working {
                collections: vec!["metric".to_string()]
            }
        );
    }

    #[tokio::test]
    async fn test_connect_without_name_is_unavailable() {
        let config = Config {
            port: 8000,
            database_url: None,
            database_name: None,
        };
        let db = DocumentStore::connect(&config).await;
        assert_eq!(db.probe().await, DatabaseStatus::Unavailable);
    }
}
