use chaintip_types::Head;
use tokio::sync::RwLock;

/// In-memory cache of the highest-numbered head seen so far.
///
/// The cache tracks the greatest block number ever observed, in arrival
/// order, and is not a canonical-tip judgment: a reorg onto a branch with
/// lower numbers never displaces the cached head. Callers needing the
/// canonical view reconstruct it from storage instead.
///
/// The lock is held only for the in-memory compare and swap, never across
/// storage I/O, so any number of readers proceed together and writers
/// exclude them only briefly.
#[derive(Debug, Default)]
pub struct HeadCache {
    highest_seen: RwLock<Option<Head>>,
}

impl HeadCache {
    /// Creates an empty [`HeadCache`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cached head with `head` if it ranks strictly above the
    /// current one, with an empty cache ranking lowest.
    ///
    /// Returns `true` if the cache was replaced.
    pub async fn save(&self, head: Head) -> bool {
        let mut guard = self.highest_seen.write().await;
        if head.is_newer_than(guard.as_ref()) {
            *guard = Some(head);
            true
        } else {
            false
        }
    }

    /// Returns a copy of the cached highest seen head, or `None` if no head
    /// has been observed or recovered yet. Never touches storage.
    pub async fn highest_seen_head(&self) -> Option<Head> {
        *self.highest_seen.read().await
    }

    /// Unconditionally replaces the cache contents, discarding any previous
    /// value. Used by startup recovery.
    pub async fn install(&self, head: Option<Head>) {
        *self.highest_seen.write().await = head;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::B256;

    fn head(number: u64) -> Head {
        Head::new(B256::with_last_byte(number as u8), number, B256::ZERO, 0)
    }

    #[tokio::test]
    async fn test_starts_absent() {
        let cache = HeadCache::new();
        assert_eq!(cache.highest_seen_head().await, None);
    }

    #[tokio::test]
    async fn test_save_keeps_maximum() {
        let cache = HeadCache::new();
        assert!(cache.save(head(5)).await);
        assert!(!cache.save(head(3)).await);
        assert!(cache.save(head(8)).await);
        assert_eq!(cache.highest_seen_head().await.map(|h| h.number), Some(8));
    }

    #[tokio::test]
    async fn test_save_ignores_equal_number() {
        let cache = HeadCache::new();
        assert!(cache.save(head(5)).await);
        let sibling = Head::new(B256::with_last_byte(0xff), 5, B256::ZERO, 1);
        assert!(!cache.save(sibling).await);
        assert_eq!(cache.highest_seen_head().await, Some(head(5)));
    }

    #[tokio::test]
    async fn test_install_replaces_downward() {
        let cache = HeadCache::new();
        cache.save(head(9)).await;
        cache.install(Some(head(4))).await;
        assert_eq!(cache.highest_seen_head().await.map(|h| h.number), Some(4));

        cache.install(None).await;
        assert_eq!(cache.highest_seen_head().await, None);
    }

    #[tokio::test]
    async fn test_concurrent_saves_commute() {
        use std::sync::Arc;

        let cache = Arc::new(HeadCache::new());
        let mut handles = Vec::new();
        for number in 1..=32u64 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move { cache.save(head(number)).await }));
        }
        for handle in handles {
            handle.await.expect("save task");
        }
        assert_eq!(cache.highest_seen_head().await.map(|h| h.number), Some(32));
    }
}
