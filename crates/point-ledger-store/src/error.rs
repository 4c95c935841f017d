//! Error types for the storage layer.

use std::sync::PoisonError;

use point_ledger_core::LedgerError;

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The storage backend failed.
    #[error("backend error: {0}")]
    Backend(String),
}

// `PoisonError` holds the guard, which cannot leave the locking thread, so
// only its message is kept.
impl<T> From<PoisonError<T>> for StoreError {
    fn from(err: PoisonError<T>) -> Self {
        Self::Backend(err.to_string())
    }
}

impl From<StoreError> for LedgerError {
    fn from(err: StoreError) -> Self {
        Self::Store(Box::new(err))
    }
}
