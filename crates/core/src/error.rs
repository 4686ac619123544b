//! Storage-boundary error model.

use thiserror::Error;

/// Result type used across the storage boundary.
pub type StoreResult<T> = Result<T, StoreError>;

/// Record-store failure.
///
/// Keep this focused on the two conditions callers can act on: a missing
/// record and an unusable backend. Input validation belongs at the HTTP
/// boundary, not here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The addressed record does not exist.
    #[error("record not found")]
    NotFound,

    /// The backing store could not serve the request (lost connection,
    /// poisoned lock, failed write). Aborts the operation in progress.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
