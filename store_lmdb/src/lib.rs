//! LMDB storage backend for the rano ledger.
//!
//! Implements the `rano-store` transaction contract using the `heed` LMDB
//! bindings. All five tables share a single unnamed database; keys carry a
//! one-byte table prefix, and block values carry a leading type-tag byte.

pub mod keys;
pub mod store;
pub mod txn;

pub use store::LmdbStore;
