//! Bounded backward walks over stored head ancestry.

use crate::HeadTrackerError;
use alloy_primitives::B256;
use chaintip_storage::{HeadStorageReader, StorageError};
use chaintip_types::{Chain, Head};
use tokio_util::sync::CancellationToken;
use tracing::warn;

/// A finite cursor over the stored ancestors of a head.
///
/// Each step looks up the next hash in storage and follows its parent link,
/// until the requested depth is reached or an ancestor is missing. A missing
/// ancestor ends the walk without error, so a walk racing concurrent
/// trimming simply observes a shorter chain. The walk is iterative and not
/// restartable once exhausted.
#[derive(Debug)]
pub struct AncestorWalk<'a, S> {
    store: &'a S,
    cancellation: &'a CancellationToken,
    next_hash: B256,
    remaining: u64,
}

impl<'a, S> AncestorWalk<'a, S> {
    /// Creates a walk starting at `start_hash`, yielding at most `depth` heads.
    pub const fn new(
        store: &'a S,
        cancellation: &'a CancellationToken,
        start_hash: B256,
        depth: u64,
    ) -> Self {
        Self { store, cancellation, next_hash: start_hash, remaining: depth }
    }
}

impl<S> AncestorWalk<'_, S>
where
    S: HeadStorageReader,
{
    /// Advances the walk by one head.
    ///
    /// # Returns
    /// * `Ok(Some(Head))` with the next head toward genesis.
    /// * `Ok(None)` once the depth budget is spent or the next ancestor is
    ///   not stored.
    /// * `Err(HeadTrackerError::Cancelled)` if the caller's token fired;
    ///   retryable with a fresh walk.
    /// * `Err(HeadTrackerError::Storage)` on any other storage failure.
    pub async fn next_head(&mut self) -> Result<Option<Head>, HeadTrackerError> {
        if self.remaining == 0 {
            return Ok(None);
        }
        if self.cancellation.is_cancelled() {
            return Err(HeadTrackerError::Cancelled);
        }
        match self.store.head_by_hash(self.next_hash).await {
            Ok(head) => {
                self.remaining -= 1;
                self.next_hash = head.parent_hash;
                Ok(Some(head))
            }
            Err(StorageError::EntryNotFound(_)) => {
                self.remaining = 0;
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Assembles the ancestry [`Chain`] of `start_hash`, at most `depth` heads long.
///
/// Fails with [`HeadTrackerError::HeadNotFound`] only when `start_hash`
/// itself has no record; ancestors missing further down end the chain there.
/// A depth of zero short-circuits to an empty chain without touching storage.
pub(crate) async fn reconstruct<S>(
    store: &S,
    cancellation: &CancellationToken,
    start_hash: B256,
    depth: u64,
) -> Result<Chain, HeadTrackerError>
where
    S: HeadStorageReader,
{
    if depth == 0 {
        return Ok(Chain::default());
    }

    let mut walk = AncestorWalk::new(store, cancellation, start_hash, depth);
    let mut heads = Vec::new();
    while let Some(head) = walk.next_head().await? {
        heads.push(head);
    }

    if heads.is_empty() {
        warn!(target: "head_tracker", hash = %start_hash, "No stored head for requested chain start");
        return Err(HeadTrackerError::HeadNotFound(start_hash));
    }
    Ok(Chain::new(heads))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chaintip_storage::{HeadStorageWriter, MemoryHeadStore};

    fn hash(byte: u8) -> B256 {
        B256::with_last_byte(byte)
    }

    /// Stores a linked run of heads with numbers `from..=to`, where each
    /// head's hash is its number and its parent is the previous head.
    async fn store_run(store: &MemoryHeadStore, from: u64, to: u64) {
        for number in from..=to {
            let head = Head::new(hash(number as u8), number, hash(number as u8 - 1), number * 12);
            store.insert_head_if_absent(head).await.expect("insert head");
        }
    }

    #[tokio::test]
    async fn test_chain_is_ordered_tip_first() {
        let store = MemoryHeadStore::new();
        store_run(&store, 1, 5).await;

        let chain = reconstruct(&store, &CancellationToken::new(), hash(5), 3)
            .await
            .expect("reconstruct chain");
        let numbers: Vec<u64> = chain.iter().map(|h| h.number).collect();
        assert_eq!(numbers, vec![5, 4, 3]);
    }

    #[tokio::test]
    async fn test_chain_never_exceeds_depth() {
        let store = MemoryHeadStore::new();
        store_run(&store, 1, 20).await;

        let chain = reconstruct(&store, &CancellationToken::new(), hash(20), 4)
            .await
            .expect("reconstruct chain");
        assert_eq!(chain.len(), 4);
        assert_eq!(chain.oldest().map(|h| h.number), Some(17));
    }

    #[tokio::test]
    async fn test_short_history_is_not_an_error() {
        let store = MemoryHeadStore::new();
        store_run(&store, 8, 10).await;

        let chain = reconstruct(&store, &CancellationToken::new(), hash(10), 100)
            .await
            .expect("reconstruct chain");
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.tip().map(|h| h.number), Some(10));
    }

    #[tokio::test]
    async fn test_missing_start_hash_is_head_not_found() {
        let store = MemoryHeadStore::new();
        store_run(&store, 1, 3).await;

        let result = reconstruct(&store, &CancellationToken::new(), hash(99), 2).await;
        assert_eq!(result, Err(HeadTrackerError::HeadNotFound(hash(99))));
    }

    #[tokio::test]
    async fn test_zero_depth_returns_empty_chain() {
        let store = MemoryHeadStore::new();
        let chain = reconstruct(&store, &CancellationToken::new(), hash(1), 0)
            .await
            .expect("reconstruct chain");
        assert!(chain.is_empty());
    }

    #[tokio::test]
    async fn test_cancellation_surfaces_as_cancelled() {
        let store = MemoryHeadStore::new();
        store_run(&store, 1, 3).await;

        let cancellation = CancellationToken::new();
        cancellation.cancel();
        let result = reconstruct(&store, &cancellation, hash(3), 2).await;
        assert_eq!(result, Err(HeadTrackerError::Cancelled));
    }

    #[tokio::test]
    async fn test_walk_survives_trimmed_ancestor() {
        let store = MemoryHeadStore::new();
        store_run(&store, 1, 6).await;
        // Concurrent trimming removed everything below 4 mid-history.
        store.trim_heads_below(4).await.expect("trim heads");

        let chain = reconstruct(&store, &CancellationToken::new(), hash(6), 6)
            .await
            .expect("reconstruct chain");
        let numbers: Vec<u64> = chain.iter().map(|h| h.number).collect();
        assert_eq!(numbers, vec![6, 5, 4]);
    }
}
