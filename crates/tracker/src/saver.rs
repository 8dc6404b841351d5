use crate::{HeadCache, HeadTrackerConfig, HeadTrackerError, chain, metrics::Metrics};
use alloy_primitives::B256;
use chaintip_storage::{HeadStorage, StorageError};
use chaintip_types::{Chain, Head};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Outcome of a [`HeadSaver::save`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The head was durably saved and history was trimmed.
    Saved,
    /// The caller's cancellation token fired after the write was attempted.
    /// The write may or may not have landed; since the insert is idempotent
    /// the head is safe to retry or ignore. Callers must not treat this
    /// outcome as an error.
    Interrupted,
}

/// Records observed heads and tracks the highest one seen.
///
/// The saver is the ingestion entry point: every newly observed head goes
/// through [`HeadSaver::save`], which updates the in-memory [`HeadCache`],
/// persists the head through the storage port, and trims history beyond the
/// configured window. Lookups and chain reconstruction run concurrently with
/// ingestion; the only state the saver guards itself is the cached highest
/// seen head.
#[derive(Debug)]
pub struct HeadSaver<S> {
    store: Arc<S>,
    cache: HeadCache,
    config: HeadTrackerConfig,
}

impl<S> HeadSaver<S>
where
    S: HeadStorage,
{
    /// Creates a new [`HeadSaver`] over the given store.
    pub fn new(store: Arc<S>, config: HeadTrackerConfig) -> Self {
        Metrics::init();
        Self { store, cache: HeadCache::new(), config }
    }

    /// Records a newly observed head.
    ///
    /// Updates the highest-seen cache if `head` ranks above the current
    /// entry, idempotently persists `head`, then deletes stored heads older
    /// than the configured history window.
    ///
    /// The cache update stands regardless of the persistence outcome. If
    /// `cancellation` fired by the time the write attempt returns, the call
    /// reports [`SaveOutcome::Interrupted`] instead of whatever the write
    /// returned, and skips trimming. A trim failure after a successful
    /// insert surfaces as [`HeadTrackerError::Trim`]: the head itself is
    /// durable, only housekeeping failed.
    pub async fn save(
        &self,
        cancellation: &CancellationToken,
        head: Head,
    ) -> Result<SaveOutcome, HeadTrackerError> {
        if self.cache.save(head).await {
            debug!(
                target: "head_tracker",
                number = head.number,
                hash = %head.hash,
                "New highest seen head"
            );
            metrics::gauge!(Metrics::TRACKER_HIGHEST_SEEN_HEAD).set(head.number as f64);
        }

        let inserted = self.store.insert_head_if_absent(head).await;
        if cancellation.is_cancelled() {
            debug!(
                target: "head_tracker",
                hash = %head.hash,
                "Save interrupted by cancellation after write attempt"
            );
            metrics::counter!(Metrics::TRACKER_SAVES_INTERRUPTED_TOTAL).increment(1);
            return Ok(SaveOutcome::Interrupted);
        }
        inserted.inspect_err(|err| {
            error!(target: "head_tracker", hash = %head.hash, %err, "Failed to persist head");
        })?;
        metrics::counter!(Metrics::TRACKER_HEADS_SAVED_TOTAL).increment(1);

        self.trim_history().await?;
        Ok(SaveOutcome::Saved)
    }

    /// Deletes heads more than `history_depth` blocks below the highest
    /// persisted number.
    async fn trim_history(&self) -> Result<(), HeadTrackerError> {
        let highest = self.store.latest_head().await.map_err(HeadTrackerError::Trim)?;
        let Some(min_number) =
            highest.and_then(|head| head.number.checked_sub(self.config.history_depth))
        else {
            return Ok(());
        };

        let trimmed = self
            .store
            .trim_heads_below(min_number)
            .await
            .map_err(HeadTrackerError::Trim)
            .inspect_err(|err| {
                error!(target: "head_tracker", min_number, %err, "Failed to trim head history");
            })?;
        if trimmed > 0 {
            debug!(target: "head_tracker", min_number, trimmed, "Trimmed old heads");
            metrics::counter!(Metrics::TRACKER_HEADS_TRIMMED_TOTAL).increment(trimmed as u64);
        }
        Ok(())
    }

    /// Returns a copy of the highest head seen so far, or `None` before any
    /// save or recovery. Never blocks on storage.
    pub async fn highest_seen_head(&self) -> Option<Head> {
        self.cache.highest_seen_head().await
    }

    /// Reloads the highest persisted head into the cache, discarding any
    /// previous cache value, and returns it.
    ///
    /// Meant for startup recovery but safe to call at any time.
    pub async fn recover_from_store(&self) -> Result<Option<Head>, HeadTrackerError> {
        let head = self.store.latest_head().await.inspect_err(|err| {
            error!(target: "head_tracker", %err, "Failed to load highest head from storage");
        })?;
        self.cache.install(head).await;
        if let Some(head) = &head {
            info!(
                target: "head_tracker",
                number = head.number,
                hash = %head.hash,
                "Recovered highest seen head from storage"
            );
            metrics::gauge!(Metrics::TRACKER_HIGHEST_SEEN_HEAD).set(head.number as f64);
        }
        Ok(head)
    }

    /// Idempotently persists a head without touching the cache or trimming.
    ///
    /// A pass-through for recovery and diagnostic paths that bypass full
    /// ingestion.
    pub async fn insert_head_if_absent(&self, head: Head) -> Result<(), HeadTrackerError> {
        Ok(self.store.insert_head_if_absent(head).await?)
    }

    /// Looks up a stored head by hash.
    ///
    /// # Returns
    /// * `Ok(Head)` if the head is stored.
    /// * `Err(HeadTrackerError::HeadNotFound)` if no head with the hash exists.
    /// * `Err(HeadTrackerError::Storage)` on any other storage failure.
    pub async fn head_by_hash(&self, hash: B256) -> Result<Head, HeadTrackerError> {
        match self.store.head_by_hash(hash).await {
            Ok(head) => Ok(head),
            Err(StorageError::EntryNotFound(_)) => Err(HeadTrackerError::HeadNotFound(hash)),
            Err(err) => Err(err.into()),
        }
    }

    /// Reconstructs the ancestry chain of `start_hash`, at most `depth`
    /// heads long, tip first.
    ///
    /// Fails with [`HeadTrackerError::HeadNotFound`] only when `start_hash`
    /// itself has no record; a chain shorter than `depth` is not an error,
    /// including when ancestors disappear mid-walk to concurrent trimming.
    pub async fn chain(
        &self,
        cancellation: &CancellationToken,
        start_hash: B256,
        depth: u64,
    ) -> Result<Chain, HeadTrackerError> {
        chain::reconstruct(self.store.as_ref(), cancellation, start_hash, depth).await
    }
}
