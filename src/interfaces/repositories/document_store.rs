use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::errors::StoreError;

/// Stored document body, without its identifier.
pub type Fields = Map<String, Value>;

/// A record as returned by the store: the store-assigned identifier lifted
/// out of the body into `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: String,
    pub fields: Fields,
}

/// Exact-equality filter over top-level fields. An empty filter matches
/// every record in the collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter(Fields);

impl Filter {
    pub fn new() -> Self {
        Filter(Map::new())
    }

    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_fields(&self) -> &Fields {
        &self.0
    }

    pub fn matches(&self, fields: &Fields) -> bool {
        self.0
            .iter()
            .all(|(key, expected)| fields.get(key) == Some(expected))
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn create_document(&self, collection: &str, doc: Fields) -> Result<String, StoreError>;
    async fn get_documents(&self, collection: &str, filter: &Filter, limit: Option<i64>) -> Result<Vec<Record>, StoreError>;
    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError>;
    async fn ping(&self) -> Result<(), StoreError>;
    fn database_name(&self) -> &str;
    async fn close(&self);
}

/// Process-wide handle to the document store.
///
/// Built once at startup and shared read-only by every handler. A client
/// built with [`StoreClient::disabled`] answers every call with
/// [`StoreError::Disabled`].
#[derive(Clone)]
pub struct StoreClient {
    backend: Option<Arc<dyn DocumentStore>>,
}

impl StoreClient {
    pub fn new(backend: Arc<dyn DocumentStore>) -> Self {
        StoreClient { backend: Some(backend) }
    }

    pub fn disabled() -> Self {
        StoreClient { backend: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    pub fn database_name(&self) -> Option<&str> {
        self.backend.as_deref().map(|b| b.database_name())
    }

    fn backend(&self) -> Result<&dyn DocumentStore, StoreError> {
        self.backend.as_deref().ok_or(StoreError::Disabled)
    }

    pub async fn create_document(&self, collection: &str, doc: Fields) -> Result<String, StoreError> {
        self.backend()?.create_document(collection, doc).await
    }

    pub async fn get_documents(
        &self,
        collection: &str,
        filter: &Filter,
        limit: Option<i64>,
    ) -> Result<Vec<Record>, StoreError> {
        self.backend()?.get_documents(collection, filter, limit).await
    }

    pub async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        self.backend()?.list_collection_names().await
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.backend()?.ping().await
    }

    pub async fn close(&self) {
        if let Some(backend) = &self.backend {
            backend.close().await;
        }
    }
}

impl std::fmt::Debug for StoreClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreClient")
            .field("enabled", &self.is_enabled())
            .field("database_name", &self.database_name())
            .finish()
    }
}
