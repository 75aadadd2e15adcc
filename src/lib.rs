//! presence-api - request-intake backend for the Smart Presence service
//!
//! Accepts structured request-ticket submissions over HTTP, validates them
//! against a declared schema, and persists them to a document store. Also
//! exposes diagnostic endpoints reporting store connectivity and echoing
//! the schema definitions for client tooling.

pub mod observability;
pub mod schema;
pub mod server;
pub mod store;
