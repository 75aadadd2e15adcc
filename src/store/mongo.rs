//! MongoDB-backed document store.

use async_trait::async_trait;
use mongodb::bson::{self, Bson, Document};
use mongodb::{Client, Database};

use crate::schema::ValidatedRecord;

use super::adapter::{ConnectionProbe, DiagnosticError, DocumentStore, PROBE_COLLECTION_LIMIT};
use super::errors::{truncate_cause, StoreError, StoreResult};

/// Document store backed by a single MongoDB database handle.
///
/// Construction never fails: missing configuration or an unusable
/// connection string yields a disconnected store that reports itself
/// through `status` and rejects writes with `StoreError::NotConnected`.
pub struct MongoStore {
    database: Option<Database>,
    unavailable: Option<DiagnosticError>,
}

impl MongoStore {
    /// Builds a store from the configured connection string and database
    /// name; either may be absent.
    pub async fn connect(url: Option<&str>, database_name: Option<&str>) -> Self {
        let (Some(url), Some(name)) = (url, database_name) else {
            return Self {
                database: None,
                unavailable: Some(DiagnosticError::NotConfigured),
            };
        };

        match Client::with_uri_str(url).await {
            Ok(client) => Self {
                database: Some(client.database(name)),
                unavailable: None,
            },
            Err(e) => Self {
                database: None,
                unavailable: Some(DiagnosticError::Unreachable(truncate_cause(&e.to_string()))),
            },
        }
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn probe(&self) -> Result<ConnectionProbe, DiagnosticError> {
        let Some(database) = &self.database else {
            return Err(self
                .unavailable
                .clone()
                .unwrap_or(DiagnosticError::NotConfigured));
        };

        let mut collections =
            database
                .list_collection_names()
                .await
                .map_err(|e| DiagnosticError::Metadata {
                    database: database.name().to_string(),
                    cause: e.to_string(),
                })?;
        collections.truncate(PROBE_COLLECTION_LIMIT);

        Ok(ConnectionProbe {
            database_name: database.name().to_string(),
            collections,
        })
    }

    async fn insert(&self, collection: &str, record: &ValidatedRecord) -> StoreResult<String> {
        let database = self.database.as_ref().ok_or(StoreError::NotConnected)?;

        let document =
            bson::to_document(record.fields()).map_err(|e| StoreError::rejected(&e.to_string()))?;

        let result = database
            .collection::<Document>(collection)
            .insert_one(document)
            .await
            .map_err(|e| StoreError::rejected(&e.to_string()))?;

        let id = match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        };
        Ok(id)
    }
}
