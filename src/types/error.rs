//! Error taxonomy for store operations

use thiserror::Error;

/// Errors surfaced by store operations.
///
/// `NotFound` is a per-operation outcome, never fatal to the store: the
/// chain is left exactly as it was before the failed call.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no event with id {id}")]
    NotFound { id: u64 },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
