use alloy_primitives::B256;
use chaintip_storage::StorageError;
use thiserror::Error;

/// Custom error type for the head tracker core logic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeadTrackerError {
    /// No head with the given hash is stored. A lookup miss, not a fault;
    /// callers are expected to distinguish it from storage failures.
    #[error("head {0} not found")]
    HeadNotFound(B256),

    /// The caller's cancellation token fired before the operation completed.
    /// Retryable; no state was corrupted.
    #[error("operation cancelled")]
    Cancelled,

    /// Indicates that an error occurred while interacting with the storage layer.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Trimming old head history failed after the head itself was saved.
    /// Stored history may hold more than the configured window until a later
    /// save trims successfully.
    #[error("failed to trim head history")]
    Trim(#[source] StorageError),
}
