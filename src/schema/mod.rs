//! Schema definitions and request validation.
//!
//! Schemas serve two purposes here:
//!
//! - validating inbound payloads before anything touches the store
//! - producing structural descriptions for client tooling via `/schema`
//!
//! # Design Principles
//!
//! - Validation is a pure function of its input
//! - Every non-conformant field is reported, not just the first
//! - Descriptions are statically declared (no runtime reflection)
//! - A record is persisted only after it has passed validation

mod errors;
mod types;
mod validator;

pub use errors::{FieldIssue, ValidationError};
pub use types::{FieldDef, FieldType, Schema, SchemaRegistry};
pub use validator::ValidatedRecord;
