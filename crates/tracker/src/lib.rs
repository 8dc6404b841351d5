//! Head tracking core for chaintip.
//!
//! This crate contains the logic that follows a chain's tip as observed by a
//! client: [`HeadSaver`] records newly observed heads through the storage
//! port and keeps the in-memory [`HeadCache`] pointed at the highest-numbered
//! head seen so far, while [`AncestorWalk`] reconstructs bounded ancestry
//! chains from stored heads.

mod config;
pub use config::{DEFAULT_HISTORY_DEPTH, HeadTrackerConfig};

mod error;
pub use error::HeadTrackerError;

mod cache;
pub use cache::HeadCache;

mod chain;
pub use chain::AncestorWalk;

mod saver;
pub use saver::{HeadSaver, SaveOutcome};

mod metrics;
