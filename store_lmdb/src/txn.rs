//! Transaction handles over the shared keyspace.
//!
//! Read operations are shared between the read-only and read-write handles
//! through free functions taking an LMDB `RoTxn` (a `RwTxn` dereferences to
//! one). Every value leaves the transaction as an owned copy.

use std::ops::Bound;

use heed::types::Bytes;
use heed::{Database, RoTxn, RwTxn};

use rano_block::{Block, BlockType, Frontier};
use rano_store::{AddressInfo, Pending, ReadTransaction, StoreError, WriteTransaction};
use rano_types::{Address, Balance, BlockHash};

use crate::keys::{
    address_key, block_key, frontier_key, pending_key, representation_key, PREFIX_BLOCK,
    PREFIX_FRONTIER,
};
use crate::store::backend;

pub struct LmdbReadTransaction<'a> {
    pub(crate) txn: RoTxn<'a>,
    pub(crate) db: Database<Bytes, Bytes>,
}

pub struct LmdbWriteTransaction<'a> {
    pub(crate) txn: RwTxn<'a>,
    pub(crate) db: Database<Bytes, Bytes>,
}

impl ReadTransaction for LmdbReadTransaction<'_> {
    fn empty(&self) -> Result<bool, StoreError> {
        empty(&self.db, &self.txn)
    }

    fn has_block(&self, hash: &BlockHash) -> Result<bool, StoreError> {
        has_block(&self.db, &self.txn, hash)
    }

    fn get_block(&self, hash: &BlockHash) -> Result<Block, StoreError> {
        get_block(&self.db, &self.txn, hash)
    }

    fn count_blocks(&self) -> Result<u64, StoreError> {
        count_prefix(&self.db, &self.txn, PREFIX_BLOCK)
    }

    fn get_address(&self, address: &Address) -> Result<AddressInfo, StoreError> {
        get_address(&self.db, &self.txn, address)
    }

    fn get_frontier(&self, hash: &BlockHash) -> Result<Frontier, StoreError> {
        get_frontier(&self.db, &self.txn, hash)
    }

    fn frontiers(&self) -> Result<Vec<Frontier>, StoreError> {
        frontiers(&self.db, &self.txn)
    }

    fn count_frontiers(&self) -> Result<u64, StoreError> {
        count_prefix(&self.db, &self.txn, PREFIX_FRONTIER)
    }

    fn get_pending(
        &self,
        destination: &Address,
        source: &BlockHash,
    ) -> Result<Pending, StoreError> {
        get_pending(&self.db, &self.txn, destination, source)
    }

    fn get_representation(&self, representative: &Address) -> Result<Balance, StoreError> {
        get_representation(&self.db, &self.txn, representative)
    }
}

impl ReadTransaction for LmdbWriteTransaction<'_> {
    fn empty(&self) -> Result<bool, StoreError> {
        empty(&self.db, &self.txn)
    }

    fn has_block(&self, hash: &BlockHash) -> Result<bool, StoreError> {
        has_block(&self.db, &self.txn, hash)
    }

    fn get_block(&self, hash: &BlockHash) -> Result<Block, StoreError> {
        get_block(&self.db, &self.txn, hash)
    }

    fn count_blocks(&self) -> Result<u64, StoreError> {
        count_prefix(&self.db, &self.txn, PREFIX_BLOCK)
    }

    fn get_address(&self, address: &Address) -> Result<AddressInfo, StoreError> {
        get_address(&self.db, &self.txn, address)
    }

    fn get_frontier(&self, hash: &BlockHash) -> Result<Frontier, StoreError> {
        get_frontier(&self.db, &self.txn, hash)
    }

    fn frontiers(&self) -> Result<Vec<Frontier>, StoreError> {
        frontiers(&self.db, &self.txn)
    }

    fn count_frontiers(&self) -> Result<u64, StoreError> {
        count_prefix(&self.db, &self.txn, PREFIX_FRONTIER)
    }

    fn get_pending(
        &self,
        destination: &Address,
        source: &BlockHash,
    ) -> Result<Pending, StoreError> {
        get_pending(&self.db, &self.txn, destination, source)
    }

    fn get_representation(&self, representative: &Address) -> Result<Balance, StoreError> {
        get_representation(&self.db, &self.txn, representative)
    }
}

impl WriteTransaction for LmdbWriteTransaction<'_> {
    fn add_block(&mut self, block: &Block) -> Result<(), StoreError> {
        let key = block_key(&block.hash());
        if self.db.get(&self.txn, &key).map_err(backend)?.is_some() {
            return Err(StoreError::BlockExists);
        }
        let body = block.encode();
        let mut value = Vec::with_capacity(1 + body.len());
        value.push(block.block_type().tag());
        value.extend_from_slice(&body);
        self.db.put(&mut self.txn, &key, &value).map_err(backend)
    }

    fn delete_block(&mut self, hash: &BlockHash) -> Result<(), StoreError> {
        self.db
            .delete(&mut self.txn, &block_key(hash))
            .map_err(backend)?;
        Ok(())
    }

    fn add_address(&mut self, address: &Address, info: &AddressInfo) -> Result<(), StoreError> {
        let key = address_key(address);
        if self.db.get(&self.txn, &key).map_err(backend)?.is_some() {
            return Err(StoreError::Duplicate("address"));
        }
        self.db
            .put(&mut self.txn, &key, &info.encode())
            .map_err(backend)
    }

    fn update_address(
        &mut self,
        address: &Address,
        info: &AddressInfo,
    ) -> Result<(), StoreError> {
        self.db
            .put(&mut self.txn, &address_key(address), &info.encode())
            .map_err(backend)
    }

    fn delete_address(&mut self, address: &Address) -> Result<(), StoreError> {
        self.db
            .delete(&mut self.txn, &address_key(address))
            .map_err(backend)?;
        Ok(())
    }

    fn add_frontier(&mut self, frontier: &Frontier) -> Result<(), StoreError> {
        let key = frontier_key(&frontier.hash);
        if self.db.get(&self.txn, &key).map_err(backend)?.is_some() {
            return Err(StoreError::Duplicate("frontier"));
        }
        self.db
            .put(&mut self.txn, &key, frontier.address.as_bytes())
            .map_err(backend)
    }

    fn delete_frontier(&mut self, hash: &BlockHash) -> Result<(), StoreError> {
        self.db
            .delete(&mut self.txn, &frontier_key(hash))
            .map_err(backend)?;
        Ok(())
    }

    fn add_pending(
        &mut self,
        destination: &Address,
        source: &BlockHash,
        pending: &Pending,
    ) -> Result<(), StoreError> {
        let key = pending_key(destination, source);
        if self.db.get(&self.txn, &key).map_err(backend)?.is_some() {
            return Err(StoreError::Duplicate("pending"));
        }
        self.db
            .put(&mut self.txn, &key, &pending.encode())
            .map_err(backend)
    }

    fn delete_pending(
        &mut self,
        destination: &Address,
        source: &BlockHash,
    ) -> Result<(), StoreError> {
        self.db
            .delete(&mut self.txn, &pending_key(destination, source))
            .map_err(backend)?;
        Ok(())
    }

    fn add_representation(
        &mut self,
        representative: &Address,
        amount: Balance,
    ) -> Result<(), StoreError> {
        let current = get_representation(&self.db, &self.txn, representative)?;
        let updated = current
            .checked_add(amount)
            .ok_or(StoreError::WeightOverflow)?;
        self.put_representation(representative, updated)
    }

    fn sub_representation(
        &mut self,
        representative: &Address,
        amount: Balance,
    ) -> Result<(), StoreError> {
        let current = get_representation(&self.db, &self.txn, representative)?;
        let updated = current
            .checked_sub(amount)
            .ok_or(StoreError::WeightUnderflow)?;
        self.put_representation(representative, updated)
    }
}

impl LmdbWriteTransaction<'_> {
    fn put_representation(
        &mut self,
        representative: &Address,
        weight: Balance,
    ) -> Result<(), StoreError> {
        self.db
            .put(
                &mut self.txn,
                &representation_key(representative),
                &weight.to_store_bytes(),
            )
            .map_err(backend)
    }
}

// ── Shared read paths ──────────────────────────────────────────────────

fn prefix_bounds(prefix: u8) -> ([u8; 1], [u8; 1]) {
    ([prefix], [prefix + 1])
}

fn empty(db: &Database<Bytes, Bytes>, txn: &RoTxn) -> Result<bool, StoreError> {
    let (lower, upper) = prefix_bounds(PREFIX_BLOCK);
    let bounds = (Bound::Included(&lower[..]), Bound::Excluded(&upper[..]));
    let mut iter = db.range(txn, &bounds).map_err(backend)?;
    match iter.next() {
        Some(entry) => {
            entry.map_err(backend)?;
            Ok(false)
        }
        None => Ok(true),
    }
}

fn has_block(
    db: &Database<Bytes, Bytes>,
    txn: &RoTxn,
    hash: &BlockHash,
) -> Result<bool, StoreError> {
    Ok(db.get(txn, &block_key(hash)).map_err(backend)?.is_some())
}

fn get_block(
    db: &Database<Bytes, Bytes>,
    txn: &RoTxn,
    hash: &BlockHash,
) -> Result<Block, StoreError> {
    let value = db
        .get(txn, &block_key(hash))
        .map_err(backend)?
        .ok_or(StoreError::NotFound("block"))?;
    let (&tag, body) = value
        .split_first()
        .ok_or_else(|| StoreError::Corruption("empty block value".into()))?;
    let block_type =
        BlockType::from_tag(tag).map_err(|e| StoreError::Corruption(e.to_string()))?;
    Block::decode(block_type, body).map_err(|e| StoreError::Corruption(e.to_string()))
}

fn count_prefix(
    db: &Database<Bytes, Bytes>,
    txn: &RoTxn,
    prefix: u8,
) -> Result<u64, StoreError> {
    let (lower, upper) = prefix_bounds(prefix);
    let bounds = (Bound::Included(&lower[..]), Bound::Excluded(&upper[..]));
    let iter = db.range(txn, &bounds).map_err(backend)?;
    let mut count = 0u64;
    for entry in iter {
        entry.map_err(backend)?;
        count += 1;
    }
    Ok(count)
}

fn get_address(
    db: &Database<Bytes, Bytes>,
    txn: &RoTxn,
    address: &Address,
) -> Result<AddressInfo, StoreError> {
    let value = db
        .get(txn, &address_key(address))
        .map_err(backend)?
        .ok_or(StoreError::NotFound("address"))?;
    AddressInfo::decode(value)
}

fn get_frontier(
    db: &Database<Bytes, Bytes>,
    txn: &RoTxn,
    hash: &BlockHash,
) -> Result<Frontier, StoreError> {
    let value = db
        .get(txn, &frontier_key(hash))
        .map_err(backend)?
        .ok_or(StoreError::NotFound("frontier"))?;
    Ok(Frontier {
        address: decode_address_value(value)?,
        hash: *hash,
    })
}

fn frontiers(db: &Database<Bytes, Bytes>, txn: &RoTxn) -> Result<Vec<Frontier>, StoreError> {
    let (lower, upper) = prefix_bounds(PREFIX_FRONTIER);
    let bounds = (Bound::Included(&lower[..]), Bound::Excluded(&upper[..]));
    let iter = db.range(txn, &bounds).map_err(backend)?;
    let mut result = Vec::new();
    for entry in iter {
        let (key, value) = entry.map_err(backend)?;
        if key.len() != 33 {
            return Err(StoreError::Corruption(format!(
                "frontier key must be 33 bytes, got {}",
                key.len()
            )));
        }
        let mut hash = [0u8; 32];
        hash.copy_from_slice(&key[1..33]);
        result.push(Frontier {
            address: decode_address_value(value)?,
            hash: BlockHash::new(hash),
        });
    }
    Ok(result)
}

fn get_pending(
    db: &Database<Bytes, Bytes>,
    txn: &RoTxn,
    destination: &Address,
    source: &BlockHash,
) -> Result<Pending, StoreError> {
    let value = db
        .get(txn, &pending_key(destination, source))
        .map_err(backend)?
        .ok_or(StoreError::NotFound("pending"))?;
    Pending::decode(value)
}

fn get_representation(
    db: &Database<Bytes, Bytes>,
    txn: &RoTxn,
    representative: &Address,
) -> Result<Balance, StoreError> {
    match db
        .get(txn, &representation_key(representative))
        .map_err(backend)?
    {
        Some(value) => Balance::from_store_slice(value)
            .map_err(|e| StoreError::Corruption(e.to_string())),
        None => Ok(Balance::ZERO),
    }
}

fn decode_address_value(value: &[u8]) -> Result<Address, StoreError> {
    let bytes: [u8; 32] = value.try_into().map_err(|_| {
        StoreError::Corruption(format!("address value must be 32 bytes, got {}", value.len()))
    })?;
    Ok(Address::new(bytes))
}
