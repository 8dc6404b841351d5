//! Core types shared across chaintip components.
//!
//! This crate defines the fundamental data structures used by the head
//! tracker: the observed [`Head`] record and the derived [`Chain`]
//! ancestry sequence.

mod head;
pub use head::Head;

mod chain;
pub use chain::Chain;
