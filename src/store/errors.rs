//! Persistence error types.

use thiserror::Error;

/// Longest underlying-cause excerpt carried in an error.
///
/// Store drivers can produce very long error bodies; anything beyond this
/// length is cut before the message is stored.
pub const CAUSE_EXCERPT_MAX: usize = 50;

/// Result type for store write operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from the document-store write path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No live connection to the document store.
    #[error("document store is not connected")]
    NotConnected,

    /// The store rejected the write.
    #[error("write rejected by store: {cause}")]
    Rejected {
        /// Bounded excerpt of the underlying cause
        cause: String,
    },
}

impl StoreError {
    /// Builds a `Rejected` error with the cause excerpt bounded.
    pub fn rejected(cause: &str) -> Self {
        Self::Rejected {
            cause: truncate_cause(cause),
        }
    }
}

/// Truncates an underlying error message to `CAUSE_EXCERPT_MAX` characters,
/// cutting on a char boundary.
pub fn truncate_cause(cause: &str) -> String {
    cause.chars().take(CAUSE_EXCERPT_MAX).collect()
}
