// ABOUTME: In-memory workout storage with insertion order and process lifetime
// ABOUTME: Guards validate-then-append behind a single write lock for atomicity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness

//! In-memory workout store.
//!
//! Records live for the process lifetime only; there is no durability and
//! no removal or update operation. The duplicate check and the append run
//! under one write lock so concurrent submissions cannot both pass the
//! check and insert the same name.

use serde_json::Value;
use tokio::sync::RwLock;

use crate::features::FeatureFlags;
use crate::models::WorkoutRecord;
use crate::validator::{self, ValidationError};

/// Append-only, insertion-ordered collection of accepted workouts
#[derive(Debug, Default)]
pub struct WorkoutStore {
    records: RwLock<Vec<WorkoutRecord>>,
}

impl WorkoutStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return all stored records in insertion order
    pub async fn list(&self) -> Vec<WorkoutRecord> {
        self.records.read().await.clone()
    }

    /// Validate a candidate payload against the current contents and append
    /// it on success.
    ///
    /// On failure the store is left unchanged; there is no partial insert.
    pub async fn add(
        &self,
        candidate: &Value,
        flags: &FeatureFlags,
    ) -> Result<WorkoutRecord, ValidationError> {
        let mut records = self.records.write().await;
        let record = validator::validate(candidate, flags, &records)?;
        records.push(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_add_appends_in_order() {
        let store = WorkoutStore::new();
        let flags = FeatureFlags::default();

        store
            .add(&json!({"workout": "run", "duration": 30}), &flags)
            .await
            .unwrap();
        store
            .add(&json!({"workout": "walk", "duration": 20}), &flags)
            .await
            .unwrap();

        let records = store.list().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].workout, "run");
        assert_eq!(records[1].workout, "walk");
    }

    #[tokio::test]
    async fn test_rejected_payload_leaves_store_unchanged() {
        let store = WorkoutStore::new();
        let flags = FeatureFlags::default();

        let err = store
            .add(&json!({"workout": "run", "duration": -5}), &flags)
            .await
            .unwrap_err();
        assert_eq!(err, ValidationError::DurationNotPositive);
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_rejected_against_stored_records() {
        let store = WorkoutStore::new();
        let flags = FeatureFlags::default();

        store
            .add(&json!({"workout": "run", "duration": 30}), &flags)
            .await
            .unwrap();
        let err = store
            .add(&json!({"workout": " RUN ", "duration": 20}), &flags)
            .await
            .unwrap_err();
        assert_eq!(err, ValidationError::DuplicateName);
        assert_eq!(store.list().await.len(), 1);
    }
}
