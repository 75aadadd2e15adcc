//! Document store seam shared by the Mongo-backed and in-memory adapters.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::schema::ValidatedRecord;

use super::errors::{truncate_cause, StoreResult};

/// Most collection names a diagnostic probe will report.
pub const PROBE_COLLECTION_LIMIT: usize = 10;

/// Failure while probing connection or collection metadata.
///
/// Diagnostic-only: callers downgrade this to a descriptive status string
/// and never surface it as an HTTP error.
#[derive(Debug, Clone, Error)]
pub enum DiagnosticError {
    /// No connection string or database name was configured.
    #[error("database not configured")]
    NotConfigured,

    /// A client could not be created from the configured connection string.
    #[error("connection failed: {0}")]
    Unreachable(String),

    /// The handle exists but the metadata query failed.
    #[error("metadata query failed on '{database}': {cause}")]
    Metadata { database: String, cause: String },
}

/// Raw result of a successful connection probe.
#[derive(Debug, Clone)]
pub struct ConnectionProbe {
    pub database_name: String,
    pub collections: Vec<String>,
}

/// Connection diagnostics in always-renderable form.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionStatus {
    pub connected: bool,
    pub database_name: Option<String>,
    pub collections: Vec<String>,
    /// Human-readable status, including downgraded probe errors
    pub detail: String,
}

impl ConnectionStatus {
    /// Downgrades a probe outcome into a reportable status. Never fails.
    pub fn from_probe(outcome: Result<ConnectionProbe, DiagnosticError>) -> Self {
        match outcome {
            Ok(probe) => Self {
                connected: true,
                database_name: Some(probe.database_name),
                collections: probe.collections,
                detail: "connected".into(),
            },
            Err(DiagnosticError::NotConfigured) => Self {
                connected: false,
                database_name: None,
                collections: Vec::new(),
                detail: "not configured".into(),
            },
            Err(DiagnosticError::Unreachable(reason)) => Self {
                connected: false,
                database_name: None,
                collections: Vec::new(),
                detail: format!("connection failed: {}", truncate_cause(&reason)),
            },
            Err(DiagnosticError::Metadata { database, cause }) => Self {
                connected: true,
                database_name: Some(database),
                collections: Vec::new(),
                detail: format!("connected, metadata error: {}", truncate_cause(&cause)),
            },
        }
    }
}

/// A document store reachable through a single long-lived handle.
///
/// Implementations hold no per-request state; one instance is shared
/// read-only across all in-flight requests.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inner diagnostic probe: database name plus a bounded list of
    /// collection names.
    async fn probe(&self) -> Result<ConnectionProbe, DiagnosticError>;

    /// Inserts an already-validated record into the named collection,
    /// returning the store-generated identifier.
    async fn insert(&self, collection: &str, record: &ValidatedRecord) -> StoreResult<String>;

    /// Connection diagnostics. Never fails: probe errors are folded into
    /// the returned status.
    async fn status(&self) -> ConnectionStatus {
        ConnectionStatus::from_probe(self.probe().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_successful_probe() {
        let status = ConnectionStatus::from_probe(Ok(ConnectionProbe {
            database_name: "presence".into(),
            collections: vec!["requestticket".into()],
        }));

        assert!(status.connected);
        assert_eq!(status.database_name.as_deref(), Some("presence"));
        assert_eq!(status.collections, ["requestticket"]);
        assert_eq!(status.detail, "connected");
    }

    #[test]
    fn test_status_when_not_configured() {
        let status = ConnectionStatus::from_probe(Err(DiagnosticError::NotConfigured));

        assert!(!status.connected);
        assert!(status.database_name.is_none());
        assert!(status.collections.is_empty());
        assert_eq!(status.detail, "not configured");
    }

    #[test]
    fn test_status_when_unreachable_bounds_reason() {
        let status =
            ConnectionStatus::from_probe(Err(DiagnosticError::Unreachable("x".repeat(300))));

        assert!(!status.connected);
        assert!(status.detail.starts_with("connection failed:"));
        assert!(status.detail.len() < 100);
    }

    #[test]
    fn test_status_when_metadata_query_fails() {
        let status = ConnectionStatus::from_probe(Err(DiagnosticError::Metadata {
            database: "presence".into(),
            cause: "cursor timeout".into(),
        }));

        assert!(status.connected);
        assert_eq!(status.database_name.as_deref(), Some("presence"));
        assert!(status.collections.is_empty());
        assert!(status.detail.contains("cursor timeout"));
    }
}
