//! Persistence adapter: a thin wrapper around a single document-store handle.
//!
//! # Design Principles
//!
//! - One long-lived handle, injected into handlers (no process-wide global)
//! - A single write is a single round-trip: no retry, batching, or
//!   transaction wrapping
//! - Records arrive already validated; the adapter does not re-validate
//! - Diagnostics never fail: probe errors downgrade to status strings
//! - Underlying error bodies are truncated before they can reach a client

mod adapter;
mod errors;
mod memory;
mod mongo;

pub use adapter::{
    ConnectionProbe, ConnectionStatus, DiagnosticError, DocumentStore, PROBE_COLLECTION_LIMIT,
};
pub use errors::{truncate_cause, StoreError, StoreResult, CAUSE_EXCERPT_MAX};
pub use memory::MemoryStore;
pub use mongo::MongoStore;
