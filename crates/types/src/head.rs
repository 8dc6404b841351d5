//! Contains the [`Head`] block record.

use alloy_eips::eip1898::BlockNumHash;
use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// A block header observation, as reported to the head tracker.
///
/// Heads form a backward-linked chain through [`Head::parent_hash`]. When the
/// parent of a head is known, its `number` is the parent's `number` plus one.
/// Two heads with the same `hash` are considered identical content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[display("Head {{ hash: {hash}, number: {number}, parent_hash: {parent_hash}, timestamp: {timestamp} }}")]
pub struct Head {
    /// The block hash.
    pub hash: B256,
    /// The block number.
    pub number: u64,
    /// The hash of the parent block.
    pub parent_hash: B256,
    /// The block timestamp.
    pub timestamp: u64,
}

impl Head {
    /// Creates a new [`Head`].
    pub const fn new(hash: B256, number: u64, parent_hash: B256, timestamp: u64) -> Self {
        Self { hash, number, parent_hash, timestamp }
    }

    /// Returns the [`BlockNumHash`] identifier of this head.
    pub const fn id(&self) -> BlockNumHash {
        BlockNumHash { hash: self.hash, number: self.number }
    }

    /// Returns the [`BlockNumHash`] identifier of this head's parent.
    ///
    /// The parent number is derived, so this underflows to zero at genesis.
    pub const fn parent_id(&self) -> BlockNumHash {
        BlockNumHash { hash: self.parent_hash, number: self.number.saturating_sub(1) }
    }

    /// Returns `true` if this head ranks above `other` by block number,
    /// with an absent `other` ranking lowest.
    ///
    /// This is a pure highest-number comparison. It deliberately does not
    /// check that `self` descends from `other`, so a reorg onto a branch
    /// with lower numbers never displaces a previously seen head.
    pub fn is_newer_than(&self, other: Option<&Self>) -> bool {
        other.is_none_or(|other| self.number > other.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn head(number: u64) -> Head {
        Head::new(B256::with_last_byte(number as u8), number, B256::ZERO, 0)
    }

    #[test]
    fn test_newer_than_absent() {
        assert!(head(0).is_newer_than(None));
    }

    #[rstest]
    #[case(5, 3, true)]
    #[case(3, 5, false)]
    #[case(4, 4, false)]
    fn test_newer_than(#[case] lhs: u64, #[case] rhs: u64, #[case] expected: bool) {
        assert_eq!(head(lhs).is_newer_than(Some(&head(rhs))), expected);
    }

    #[test]
    fn test_parent_id_links_backward() {
        let parent = Head::new(B256::with_last_byte(1), 9, B256::ZERO, 100);
        let child = Head::new(B256::with_last_byte(2), 10, parent.hash, 112);
        assert_eq!(child.parent_id(), parent.id());
    }

    #[test]
    fn test_parent_id_saturates_at_genesis() {
        let genesis = Head::new(B256::with_last_byte(1), 0, B256::ZERO, 0);
        assert_eq!(genesis.parent_id().number, 0);
    }
}
