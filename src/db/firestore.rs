// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with untyped-collection operations.

use crate::error::AppError;
use crate::models::StoredDocument;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Fields echoed back by an insert; only the generated ID is kept.
#[derive(Deserialize)]
struct InsertedDocument {
    #[serde(alias = "_firestore_id")]
    id: Option<String>,
}

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreClient {
    client: firestore::FirestoreDb,
}

impl FirestoreClient {
    /// Connect to Firestore for `project_id`.
    ///
    /// An explicit `endpoint` (or FIRESTORE_EMULATOR_HOST) selects the
    /// emulator with an unauthenticated connection.
    pub async fn connect(project_id: &str, endpoint: Option<&str>) -> Result<Self, AppError> {
        if endpoint.is_some() || std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::connect_emulator(project_id, endpoint).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self { client })
    }

    async fn connect_emulator(project_id: &str, endpoint: Option<&str>) -> Result<Self, AppError> {
        tracing::info!(
            endpoint = endpoint.unwrap_or("FIRESTORE_EMULATOR_HOST"),
            "Using unauthenticated connection for Firestore Emulator"
        );

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let mut options = firestore::FirestoreDbOptions::new(project_id.to_string());
        if let Some(url) = endpoint {
            options = options.with_firebase_api_url(url.to_string());
        }

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(project = project_id, "Connected to Firestore (Emulator)");

        Ok(Self { client })
    }

    /// Insert a document under a generated ID and return that ID.
    pub async fn insert<T>(&self, collection: &str, record: &T) -> Result<String, AppError>
    where
        T: Serialize + DeserializeOwned + Sync + Send,
    {
        let inserted: InsertedDocument = self
            .client
            .fluent()
            .insert()
            .into(collection)
            .generate_document_id()
            .object(record)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        inserted
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::Database("Firestore returned no document ID".to_string()))
    }

    /// Fetch up to `limit` documents from a collection in Firestore's default order.
    ///
    /// Documents that do not fit `T` are logged and left out.
    pub async fn list<T>(
        &self,
        collection: &str,
        limit: u32,
    ) -> Result<Vec<StoredDocument<T>>, AppError>
    where
        T: DeserializeOwned,
    {
        let docs = self
            .client
            .fluent()
            .select()
            .from(collection)
            .limit(limit)
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(docs
            .iter()
            .filter_map(|doc| {
                let id = document_id(&doc.name);
                match firestore::FirestoreDb::deserialize_doc_to::<T>(doc) {
                    Ok(record) => Some(StoredDocument::new(id, record)),
                    Err(e) => {
                        tracing::warn!(collection, id, error = %e, "Skipping unreadable document");
                        None
                    }
                }
            })
            .collect())
    }

    /// Up to `limit` top-level collection IDs.
    pub async fn collection_ids(&self, limit: usize) -> Result<Vec<String>, AppError> {
        let page = self
            .client
            .fluent()
            .list()
            .collections()
            .page_size(limit)
            .get_page()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(page.collection_ids)
    }
}

/// Last path segment of a full document resource name.
fn document_id(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}
