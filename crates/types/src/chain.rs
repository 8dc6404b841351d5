//! Contains the [`Chain`] ancestry sequence.

use crate::Head;
use serde::{Deserialize, Serialize};

/// An ordered ancestry of [`Head`]s, tip first, walking back toward genesis.
///
/// A [`Chain`] is derived on demand from stored heads and never persisted.
/// Its length is bounded by the depth requested from the reconstructor; a
/// shorter chain simply means fewer ancestors were available in storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    heads: Vec<Head>,
}

impl Chain {
    /// Creates a [`Chain`] from heads ordered tip first.
    pub const fn new(heads: Vec<Head>) -> Self {
        Self { heads }
    }

    /// Returns the tip of the chain, the head the walk started from.
    pub fn tip(&self) -> Option<&Head> {
        self.heads.first()
    }

    /// Returns the oldest head reachable in this chain.
    pub fn oldest(&self) -> Option<&Head> {
        self.heads.last()
    }

    /// Returns the number of heads in the chain.
    pub fn len(&self) -> usize {
        self.heads.len()
    }

    /// Returns `true` if the chain holds no heads.
    pub fn is_empty(&self) -> bool {
        self.heads.is_empty()
    }

    /// Iterates the heads tip first.
    pub fn iter(&self) -> impl Iterator<Item = &Head> {
        self.heads.iter()
    }

    /// Consumes the chain, returning the heads tip first.
    pub fn into_heads(self) -> Vec<Head> {
        self.heads
    }
}

impl IntoIterator for Chain {
    type Item = Head;
    type IntoIter = std::vec::IntoIter<Head>;

    fn into_iter(self) -> Self::IntoIter {
        self.heads.into_iter()
    }
}
