//! In-memory reference implementation of the head storage traits.

use crate::{HeadStorageReader, HeadStorageWriter, StorageError};
use alloy_primitives::B256;
use async_trait::async_trait;
use chaintip_types::Head;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// A head store backed by an in-memory hash map.
///
/// Intended for tests and for embedders that follow a chain without needing
/// the history to survive a restart. The single lock is held only for the
/// duration of each map operation.
#[derive(Debug, Default)]
pub struct MemoryHeadStore {
    heads: RwLock<HashMap<B256, Head>>,
}

impl MemoryHeadStore {
    /// Creates an empty [`MemoryHeadStore`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored heads.
    pub async fn len(&self) -> usize {
        self.heads.read().await.len()
    }

    /// Returns `true` if no heads are stored.
    pub async fn is_empty(&self) -> bool {
        self.heads.read().await.is_empty()
    }
}

#[async_trait]
impl HeadStorageReader for MemoryHeadStore {
    async fn head_by_hash(&self, hash: B256) -> Result<Head, StorageError> {
        self.heads
            .read()
            .await
            .get(&hash)
            .copied()
            .ok_or_else(|| StorageError::EntryNotFound(format!("no head with hash {hash}")))
    }

    async fn latest_head(&self) -> Result<Option<Head>, StorageError> {
        Ok(self.heads.read().await.values().max_by_key(|head| head.number).copied())
    }
}

#[async_trait]
impl HeadStorageWriter for MemoryHeadStore {
    async fn insert_head_if_absent(&self, head: Head) -> Result<(), StorageError> {
        let mut heads = self.heads.write().await;
        if heads.contains_key(&head.hash) {
            debug!(target: "head_storage", hash = %head.hash, "Head already stored, skipping insert");
            return Ok(());
        }
        heads.insert(head.hash, head);
        Ok(())
    }

    async fn trim_heads_below(&self, min_number: u64) -> Result<usize, StorageError> {
        let mut heads = self.heads.write().await;
        let before = heads.len();
        heads.retain(|_, head| head.number >= min_number);
        Ok(before - heads.len())
    }
}
