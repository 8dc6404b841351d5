//! Configuration for the head tracker.

/// Default number of trailing heads retained behind the highest persisted
/// number.
pub const DEFAULT_HISTORY_DEPTH: u64 = 100;

/// Resolved configuration consumed by the head tracker.
///
/// Loading and validating configuration is the embedder's concern; the
/// tracker only consumes the resolved values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadTrackerConfig {
    /// How many blocks of head history, measured back from the highest
    /// persisted number, must be retained. Heads further back are deleted
    /// after each successful save.
    pub history_depth: u64,
}

impl HeadTrackerConfig {
    /// Creates a config with the given history depth.
    pub const fn new(history_depth: u64) -> Self {
        Self { history_depth }
    }
}

impl Default for HeadTrackerConfig {
    fn default() -> Self {
        Self { history_depth: DEFAULT_HISTORY_DEPTH }
    }
}
