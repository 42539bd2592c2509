//! Key layout for the shared keyspace.
//!
//! Every key starts with a one-byte table prefix followed by the natural
//! key. Pending keys compose destination and source hash so that all sends
//! towards one account are adjacent.

use rano_types::{Address, BlockHash};

pub const PREFIX_BLOCK: u8 = 0;
pub const PREFIX_ADDRESS: u8 = 1;
pub const PREFIX_FRONTIER: u8 = 2;
pub const PREFIX_PENDING: u8 = 3;
pub const PREFIX_REPRESENTATION: u8 = 4;

pub(crate) fn block_key(hash: &BlockHash) -> [u8; 33] {
    prefixed(PREFIX_BLOCK, hash.as_bytes())
}

pub(crate) fn address_key(address: &Address) -> [u8; 33] {
    prefixed(PREFIX_ADDRESS, address.as_bytes())
}

pub(crate) fn frontier_key(hash: &BlockHash) -> [u8; 33] {
    prefixed(PREFIX_FRONTIER, hash.as_bytes())
}

pub(crate) fn representation_key(address: &Address) -> [u8; 33] {
    prefixed(PREFIX_REPRESENTATION, address.as_bytes())
}

pub(crate) fn pending_key(destination: &Address, source: &BlockHash) -> [u8; 65] {
    let mut key = [0u8; 65];
    key[0] = PREFIX_PENDING;
    key[1..33].copy_from_slice(destination.as_bytes());
    key[33..65].copy_from_slice(source.as_bytes());
    key
}

fn prefixed(prefix: u8, body: &[u8; 32]) -> [u8; 33] {
    let mut key = [0u8; 33];
    key[0] = prefix;
    key[1..].copy_from_slice(body);
    key
}
