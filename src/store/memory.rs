//! In-memory document store.
//!
//! Mirrors the production adapter's contract so the whole HTTP surface is
//! testable without a running database.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::schema::ValidatedRecord;

use super::adapter::{ConnectionProbe, DiagnosticError, DocumentStore, PROBE_COLLECTION_LIMIT};
use super::errors::{StoreError, StoreResult};

/// Document store holding collections in process memory.
pub struct MemoryStore {
    database_name: String,
    connected: bool,
    collections: RwLock<HashMap<String, Vec<Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            database_name: "memory".into(),
            connected: true,
            collections: RwLock::new(HashMap::new()),
        }
    }

    /// A store that behaves as if no database was ever configured.
    pub fn disconnected() -> Self {
        Self {
            connected: false,
            ..Self::new()
        }
    }

    /// Documents currently held in a collection.
    pub fn documents(&self, collection: &str) -> Vec<Value> {
        let guard = self.collections.read().unwrap_or_else(|e| e.into_inner());
        guard.get(collection).cloned().unwrap_or_default()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn probe(&self) -> Result<ConnectionProbe, DiagnosticError> {
        if !self.connected {
            return Err(DiagnosticError::NotConfigured);
        }

        let guard = self.collections.read().unwrap_or_else(|e| e.into_inner());
        let mut collections: Vec<String> = guard.keys().cloned().collect();
        collections.sort();
        collections.truncate(PROBE_COLLECTION_LIMIT);

        Ok(ConnectionProbe {
            database_name: self.database_name.clone(),
            collections,
        })
    }

    async fn insert(&self, collection: &str, record: &ValidatedRecord) -> StoreResult<String> {
        if !self.connected {
            return Err(StoreError::NotConnected);
        }

        let id = Uuid::new_v4().simple().to_string();
        let mut document = record.fields().clone();
        document.insert("_id".to_string(), Value::String(id.clone()));

        let mut guard = self.collections.write().unwrap_or_else(|e| e.into_inner());
        guard
            .entry(collection.to_string())
            .or_default()
            .push(Value::Object(document));
        Ok(id)
    }
}
