//! In-process document store backend.
//!
//! Keeps each collection as an insertion-ordered list of records behind a
//! read-write lock. Used by the test suite and for running the API locally
//! without a database.

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::{
    errors::StoreError,
    repositories::document_store::{DocumentStore, Fields, Filter, Record},
};

type CollectionMap = BTreeMap<String, Vec<Record>>;

/// Clones share the same underlying data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<CollectionMap>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held in `collection`.
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .get(collection)
            .map_or(0, |records| records.len())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn create_document(&self, collection: &str, mut doc: Fields) -> Result<String, StoreError> {
        let id = match doc.remove("_id") {
            Some(serde_json::Value::String(id)) => id,
            Some(other) => other.to_string(),
            None => Uuid::new_v4().simple().to_string(),
        };

        let mut collections = self.collections.write();
        let records = collections.entry(collection.to_string()).or_default();

        if records.iter().any(|r| r.id == id) {
            return Err(StoreError::Backend(format!(
                "duplicate key {} in collection {}", id, collection
            )));
        }

        records.push(Record { id: id.clone(), fields: doc });
        Ok(id)
    }

    async fn get_documents(&self, collection: &str, filter: &Filter, limit: Option<i64>) -> Result<Vec<Record>, StoreError> {
        let collections = self.collections.read();

        let Some(records) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        // Mongo treats a non-positive limit as "no limit"
        let limit = limit
            .filter(|l| *l > 0)
            .map_or(usize::MAX, |l| l as usize);

        Ok(records
            .iter()
            .filter(|record| filter.matches(&record.fields))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.collections.read().keys().cloned().collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn database_name(&self) -> &str {
        "memory"
    }

    async fn close(&self) {}
}
