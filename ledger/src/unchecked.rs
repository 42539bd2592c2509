//! Unchecked-block hook — where batch submission parks blocks whose
//! dependencies are not yet known.
//!
//! The ledger core does not re-process these itself; a bootstrap or sync
//! layer drains the map once the missing block arrives and resubmits the
//! dependents.

use std::collections::HashMap;

use rano_block::Block;
use rano_types::BlockHash;

/// Receives blocks the ledger could not apply because a dependency is
/// missing.
pub trait UncheckedSink {
    /// The block's `previous` (or, for an open block, its source) is not in
    /// the ledger.
    fn gap_previous(&mut self, block: Block);

    /// The block's source send exists, but no matching pending record does.
    fn gap_source(&mut self, block: Block);
}

/// A sink that drops everything. For callers with no bootstrap layer.
pub struct DiscardUnchecked;

impl UncheckedSink for DiscardUnchecked {
    fn gap_previous(&mut self, _block: Block) {}
    fn gap_source(&mut self, _block: Block) {}
}

/// Bounded in-memory implementation of [`UncheckedSink`].
///
/// Blocks are keyed by the hash they are waiting for. When that block is
/// finally applied, `take_dependents` / `take_source_dependents` drain the
/// waiters for resubmission.
pub struct UncheckedMap {
    /// previous/root hash → blocks waiting for it.
    entries: HashMap<BlockHash, Vec<Block>>,
    /// source send hash → blocks waiting to claim it.
    source_dependents: HashMap<BlockHash, Vec<Block>>,
    /// Total entries across both maps.
    count: usize,
    /// Cap on total entries, against memory exhaustion from spam.
    max_size: usize,
}

impl UncheckedMap {
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: HashMap::new(),
            source_dependents: HashMap::new(),
            count: 0,
            max_size,
        }
    }

    /// Blocks that were waiting for `hash` as their previous/root.
    pub fn take_dependents(&mut self, hash: &BlockHash) -> Vec<Block> {
        match self.entries.remove(hash) {
            Some(blocks) => {
                self.count -= blocks.len();
                blocks
            }
            None => Vec::new(),
        }
    }

    /// Blocks that were waiting for `hash` as their claimable source.
    pub fn take_source_dependents(&mut self, hash: &BlockHash) -> Vec<Block> {
        match self.source_dependents.remove(hash) {
            Some(blocks) => {
                self.count -= blocks.len();
                blocks
            }
            None => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn push(map: &mut HashMap<BlockHash, Vec<Block>>, key: BlockHash, block: Block) {
        map.entry(key).or_default().push(block);
    }
}

impl UncheckedSink for UncheckedMap {
    fn gap_previous(&mut self, block: Block) {
        if self.count >= self.max_size {
            return;
        }
        Self::push(&mut self.entries, block.root(), block);
        self.count += 1;
    }

    fn gap_source(&mut self, block: Block) {
        if self.count >= self.max_size {
            return;
        }
        let source = match &block {
            Block::Open(b) => b.source,
            Block::Receive(b) => b.source,
            // Send/change blocks have no source and never gap on one.
            _ => return,
        };
        Self::push(&mut self.source_dependents, source, block);
        self.count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rano_block::{OpenBlock, ReceiveBlock, SendBlock};
    use rano_types::{Address, Balance, Signature};

    fn receive(previous: u8, source: u8) -> Block {
        Block::Receive(ReceiveBlock {
            previous: BlockHash::new([previous; 32]),
            source: BlockHash::new([source; 32]),
            signature: Signature::ZERO,
            work: 0,
        })
    }

    fn send(previous: u8) -> Block {
        Block::Send(SendBlock {
            previous: BlockHash::new([previous; 32]),
            destination: Address::new([0xDD; 32]),
            balance: Balance::new(1),
            signature: Signature::ZERO,
            work: 0,
        })
    }

    #[test]
    fn gap_previous_keyed_by_root() {
        let mut map = UncheckedMap::new(16);
        let block = send(0xAA);
        map.gap_previous(block.clone());
        assert_eq!(map.len(), 1);

        let dependents = map.take_dependents(&BlockHash::new([0xAA; 32]));
        assert_eq!(dependents, vec![block]);
        assert!(map.is_empty());
    }

    #[test]
    fn open_blocks_gap_on_their_source_as_root() {
        let mut map = UncheckedMap::new(16);
        let block = Block::Open(OpenBlock {
            address: Address::new([1; 32]),
            representative: Address::new([2; 32]),
            source: BlockHash::new([0xBB; 32]),
            signature: Signature::ZERO,
            work: 0,
        });
        map.gap_previous(block.clone());
        assert_eq!(
            map.take_dependents(&BlockHash::new([0xBB; 32])),
            vec![block]
        );
    }

    #[test]
    fn gap_source_keyed_by_source() {
        let mut map = UncheckedMap::new(16);
        let block = receive(0x01, 0xCC);
        map.gap_source(block.clone());

        assert!(map.take_dependents(&BlockHash::new([0xCC; 32])).is_empty());
        assert_eq!(
            map.take_source_dependents(&BlockHash::new([0xCC; 32])),
            vec![block]
        );
    }

    #[test]
    fn multiple_waiters_drain_together() {
        let mut map = UncheckedMap::new(16);
        map.gap_source(receive(0x01, 0xEE));
        map.gap_source(receive(0x02, 0xEE));
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.take_source_dependents(&BlockHash::new([0xEE; 32])).len(),
            2
        );
        assert!(map.is_empty());
    }

    #[test]
    fn unknown_hash_drains_nothing() {
        let mut map = UncheckedMap::new(16);
        assert!(map.take_dependents(&BlockHash::new([9; 32])).is_empty());
    }

    #[test]
    fn capacity_is_shared_across_both_maps() {
        let mut map = UncheckedMap::new(2);
        map.gap_previous(send(1));
        map.gap_source(receive(2, 3));
        map.gap_previous(send(4));
        assert_eq!(map.len(), 2);
    }
}
