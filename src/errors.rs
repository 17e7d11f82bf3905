//! # Store Errors
//!
//! The closed error taxonomy for the document store. Every store operation
//! returns one of these kinds; callers branch on the variant, never on
//! message text.

use std::io;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Document store errors
#[derive(Debug, Error)]
pub enum StoreError {
    // ==================
    // Lookup Errors
    // ==================

    /// Lookup miss. A normal negative result, not a failure.
    #[error("record not found")]
    NotFound,

    /// Uniqueness violation on create. Retrying the same input will fail again.
    #[error("record already exists")]
    AlreadyExists,

    /// Time-based invalidation. Distinct from `NotFound` so callers can
    /// message users differently.
    #[error("token expired")]
    Expired,

    // ==================
    // Persistence Errors
    // ==================

    /// Persistence failure. Retryable by the caller; the in-memory snapshot
    /// may be ahead of disk until the next successful write.
    #[error("persistence failure: {0}")]
    Io(#[from] io::Error),

    /// Malformed on-disk data. Fatal at startup: the store cannot safely
    /// guess at a valid empty state.
    #[error("snapshot file is corrupt: {0}")]
    Corrupt(String),

    // ==================
    // Internal Errors
    // ==================

    /// Lock poisoning and other should-not-happen conditions.
    #[error("internal error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Returns whether the process should refuse to continue with this store.
    pub fn is_fatal(&self) -> bool {
        matches!(self, StoreError::Corrupt(_))
    }

    /// Returns whether retrying the same operation can succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corruption_is_fatal() {
        let err = StoreError::Corrupt("unexpected end of input".to_string());
        assert!(err.is_fatal());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_io_is_retryable() {
        let err = StoreError::Io(io::Error::new(io::ErrorKind::Other, "disk full"));
        assert!(err.is_retryable());
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_lookup_errors_are_plain_negatives() {
        assert!(!StoreError::NotFound.is_fatal());
        assert!(!StoreError::AlreadyExists.is_retryable());
        assert!(!StoreError::Expired.is_retryable());
    }
}
