//! Persistence port for the chaintip head tracker.
//!
//! This crate defines the storage traits the tracker writes observed heads
//! through, the shared [`StorageError`] taxonomy, and [`MemoryHeadStore`],
//! an in-memory reference implementation used by tests and by embedders
//! that do not need durability.

mod error;
pub use error::StorageError;

mod traits;
pub use traits::{HeadStorage, HeadStorageReader, HeadStorageWriter};

mod mem;
pub use mem::MemoryHeadStore;
