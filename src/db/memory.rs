// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Process-local document store.
//!
//! Documents are kept as JSON values per collection in insertion order.

use crate::error::AppError;
use crate::models::StoredDocument;
use anyhow::Context;
use dashmap::DashMap;
use ring::rand::{SecureRandom, SystemRandom};
use serde::{de::DeserializeOwned, Serialize};

const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const ID_LEN: usize = 20;
// Largest multiple of the alphabet size that fits in a byte; higher bytes are
// discarded to keep the distribution uniform.
const ID_BYTE_LIMIT: u8 = (256 / ID_ALPHABET.len() * ID_ALPHABET.len()) as u8;

pub struct MemoryStore {
    collections: DashMap<String, Vec<(String, serde_json::Value)>>,
    rng: SystemRandom,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            collections: DashMap::new(),
            rng: SystemRandom::new(),
        }
    }
}

impl MemoryStore {
    pub fn insert<T: Serialize>(&self, collection: &str, record: &T) -> Result<String, AppError> {
        let value = serde_json::to_value(record).context("Failed to serialize document")?;
        let id = generate_document_id(&self.rng)?;

        self.collections
            .entry(collection.to_string())
            .or_default()
            .push((id.clone(), value));

        Ok(id)
    }

    pub fn list<T: DeserializeOwned>(
        &self,
        collection: &str,
        limit: u32,
    ) -> Result<Vec<StoredDocument<T>>, AppError> {
        let Some(docs) = self.collections.get(collection) else {
            return Ok(Vec::new());
        };

        Ok(docs
            .iter()
            .take(limit as usize)
            .filter_map(|(id, value)| match <T as serde::Deserialize>::deserialize(value) {
                Ok(record) => Some(StoredDocument::new(id.clone(), record)),
                Err(e) => {
                    tracing::warn!(
                        collection,
                        id = %id,
                        error = %e,
                        "Skipping unreadable document"
                    );
                    None
                }
            })
            .collect())
    }

    /// Collection names in lexical order, at most `limit`.
    pub fn collection_ids(&self, limit: usize) -> Vec<String> {
        let mut names: Vec<String> = self.collections.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names.truncate(limit);
        names
    }
}

/// Random 20-character alphanumeric ID in the style of Firestore auto-IDs.
fn generate_document_id(rng: &SystemRandom) -> Result<String, AppError> {
    let mut id = String::with_capacity(ID_LEN);
    let mut buf = [0u8; ID_LEN * 2];

    while id.len() < ID_LEN {
        rng.fill(&mut buf)
            .map_err(|_| anyhow::anyhow!("System random generator failed"))?;
        let remaining = ID_LEN - id.len();
        id.extend(
            buf.iter()
                .filter(|&&b| b < ID_BYTE_LIMIT)
                .map(|&b| ID_ALPHABET[b as usize % ID_ALPHABET.len()] as char)
                .take(remaining),
        );
    }

    Ok(id)
}
