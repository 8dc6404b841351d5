use crate::StorageError;
use alloy_primitives::B256;
use async_trait::async_trait;
use chaintip_types::Head;

/// Read access to persisted heads.
///
/// Implementations are expected to provide thread-safe access to head data;
/// the tracker issues concurrent lookups without external locking.
#[async_trait]
pub trait HeadStorageReader: Send + Sync {
    /// Gets the [`Head`] with the given block hash.
    ///
    /// # Returns
    /// * `Ok(Head)` if a head with the hash is stored.
    /// * `Err(StorageError::EntryNotFound)` if no head with the hash exists.
    /// * `Err(StorageError)` if there is an issue reading the head.
    async fn head_by_hash(&self, hash: B256) -> Result<Head, StorageError>;

    /// Gets the stored [`Head`] with the greatest block number.
    ///
    /// # Returns
    /// * `Ok(Some(Head))` containing the highest-numbered head if any is stored.
    /// * `Ok(None)` if the store is empty.
    /// * `Err(StorageError)` if there is an issue reading the head.
    async fn latest_head(&self) -> Result<Option<Head>, StorageError>;
}

/// Write access to persisted heads.
///
/// Both operations must be safe to run concurrently with each other and with
/// readers; the tracker does not serialize ingestions against one another.
#[async_trait]
pub trait HeadStorageWriter: Send + Sync {
    /// Persists a [`Head`], keyed by its hash.
    ///
    /// Idempotent: inserting a head whose hash is already stored is a
    /// successful no-op and must not duplicate storage.
    async fn insert_head_if_absent(&self, head: Head) -> Result<(), StorageError>;

    /// Deletes every stored head with a block number below `min_number`.
    ///
    /// A pure delete-by-threshold, safe to run concurrently with inserts
    /// and with itself.
    ///
    /// # Returns
    /// * `Ok(usize)` with the number of heads deleted.
    /// * `Err(StorageError)` if there is an issue deleting heads.
    async fn trim_heads_below(&self, min_number: u64) -> Result<usize, StorageError>;
}

/// Combined read and write access to persisted heads.
pub trait HeadStorage: HeadStorageReader + HeadStorageWriter {}

impl<T: HeadStorageReader + HeadStorageWriter> HeadStorage for T {}
