//! Storage contract for the rano ledger.
//!
//! Every storage backend implements [`Store`]: closure-scoped transactions
//! over five logical tables (blocks, address info, frontiers, pending
//! receives, representation weights). The ledger depends only on these
//! traits; the LMDB backend lives in `rano-store-lmdb`.

pub mod account;
pub mod error;
pub mod pending;
pub mod txn;

pub use account::AddressInfo;
pub use error::StoreError;
pub use pending::Pending;
pub use txn::{ReadTransaction, Store, WriteTransaction};
