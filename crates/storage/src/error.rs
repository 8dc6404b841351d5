use thiserror::Error;

/// Errors that may occur while interacting with head storage.
///
/// This enum is used across all implementations of the storage traits.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    /// The underlying database failed.
    #[error("database error: {0}")]
    Database(String),

    /// The expected entry was not found in the database.
    #[error("entry not found: {0}")]
    EntryNotFound(String),

    /// Represents a conflict occurred while attempting to write to the database.
    #[error("conflict error: {0}")]
    ConflictError(String),
}
