//! Closure-scoped transactions over the five ledger tables.
//!
//! A write transaction commits only if the closure returns `Ok`; any error
//! (or panic unwind) aborts it, leaving no trace. Values returned by the
//! transaction handle are always owned copies — backends must not hand out
//! references into their own buffers.

use crate::account::AddressInfo;
use crate::error::StoreError;
use crate::pending::Pending;
use rano_block::{Block, Frontier};
use rano_types::{Address, Balance, BlockHash};

/// A storage backend providing ACID transactions over the ledger tables.
pub trait Store {
    /// Run a read-only transaction.
    fn view<T, E, F>(&self, f: F) -> Result<T, E>
    where
        E: From<StoreError>,
        F: FnOnce(&dyn ReadTransaction) -> Result<T, E>;

    /// Run a read-write transaction. Commits iff the closure returns `Ok`.
    fn update<T, E, F>(&self, f: F) -> Result<T, E>
    where
        E: From<StoreError>,
        F: FnOnce(&mut dyn WriteTransaction) -> Result<T, E>;
}

/// Read operations available in every transaction.
pub trait ReadTransaction {
    /// True iff no block exists.
    fn empty(&self) -> Result<bool, StoreError>;

    fn has_block(&self, hash: &BlockHash) -> Result<bool, StoreError>;
    fn get_block(&self, hash: &BlockHash) -> Result<Block, StoreError>;
    fn count_blocks(&self) -> Result<u64, StoreError>;

    fn get_address(&self, address: &Address) -> Result<AddressInfo, StoreError>;

    fn get_frontier(&self, hash: &BlockHash) -> Result<Frontier, StoreError>;
    /// All frontiers, in unspecified order.
    fn frontiers(&self) -> Result<Vec<Frontier>, StoreError>;
    fn count_frontiers(&self) -> Result<u64, StoreError>;

    fn get_pending(
        &self,
        destination: &Address,
        source: &BlockHash,
    ) -> Result<Pending, StoreError>;

    /// Voting weight delegated to `representative`; zero if absent.
    fn get_representation(&self, representative: &Address) -> Result<Balance, StoreError>;
}

/// Mutations, available only inside [`Store::update`].
///
/// The `add_*` operations fail when the key is already present — append-only
/// state is never overwritten implicitly.
pub trait WriteTransaction: ReadTransaction {
    /// Fails with [`StoreError::BlockExists`] if the hash is present.
    fn add_block(&mut self, block: &Block) -> Result<(), StoreError>;
    fn delete_block(&mut self, hash: &BlockHash) -> Result<(), StoreError>;

    /// Fails if the address already has a record.
    fn add_address(&mut self, address: &Address, info: &AddressInfo) -> Result<(), StoreError>;
    /// Overwrites the existing record.
    fn update_address(&mut self, address: &Address, info: &AddressInfo)
        -> Result<(), StoreError>;
    fn delete_address(&mut self, address: &Address) -> Result<(), StoreError>;

    /// Fails if a frontier with the same hash is present.
    fn add_frontier(&mut self, frontier: &Frontier) -> Result<(), StoreError>;
    fn delete_frontier(&mut self, hash: &BlockHash) -> Result<(), StoreError>;

    /// Fails if the `(destination, source)` pair is present.
    fn add_pending(
        &mut self,
        destination: &Address,
        source: &BlockHash,
        pending: &Pending,
    ) -> Result<(), StoreError>;
    fn delete_pending(
        &mut self,
        destination: &Address,
        source: &BlockHash,
    ) -> Result<(), StoreError>;

    /// `weight := weight + amount`, starting from zero for a new key.
    fn add_representation(
        &mut self,
        representative: &Address,
        amount: Balance,
    ) -> Result<(), StoreError>;
    /// `weight := weight - amount`; underflow is a
    /// [`StoreError::WeightUnderflow`] integrity failure.
    fn sub_representation(
        &mut self,
        representative: &Address,
        amount: Balance,
    ) -> Result<(), StoreError>;
}
