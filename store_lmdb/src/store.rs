//! LMDB environment and the `Store` implementation.

use std::path::Path;

use heed::types::Bytes;
use heed::{Database, Env, EnvOpenOptions};

use rano_store::{ReadTransaction, Store, StoreError, WriteTransaction};

use crate::txn::{LmdbReadTransaction, LmdbWriteTransaction};

/// A ledger store backed by a single LMDB database.
///
/// LMDB serializes writers internally: one write transaction at a time,
/// any number of concurrent readers, each on its own snapshot.
#[derive(Debug)]
pub struct LmdbStore {
    env: Env,
    db: Database<Bytes, Bytes>,
}

pub(crate) fn backend(e: heed::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

impl LmdbStore {
    /// Open or create an LMDB environment at the given path.
    pub fn open(path: &Path, map_size: usize) -> Result<Self, StoreError> {
        std::fs::create_dir_all(path)
            .map_err(|e| StoreError::Backend(format!("failed to create directory: {e}")))?;

        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(map_size)
                .open(path)
                .map_err(backend)?
        };

        let mut wtxn = env.write_txn().map_err(backend)?;
        let db = env.create_database(&mut wtxn, None).map_err(backend)?;
        wtxn.commit().map_err(backend)?;

        Ok(Self { env, db })
    }

    /// Flush dirty pages to disk.
    ///
    /// LMDB is durable on every commit; this is an extra measure for
    /// graceful shutdown. heed doesn't expose `mdb_env_sync` directly, so
    /// an empty write transaction is committed instead.
    pub fn sync(&self) -> Result<(), StoreError> {
        let wtxn = self.env.write_txn().map_err(backend)?;
        wtxn.commit().map_err(backend)
    }
}

impl Store for LmdbStore {
    fn view<T, E, F>(&self, f: F) -> Result<T, E>
    where
        E: From<StoreError>,
        F: FnOnce(&dyn ReadTransaction) -> Result<T, E>,
    {
        let txn = self.env.read_txn().map_err(|e| E::from(backend(e)))?;
        let txn = LmdbReadTransaction { txn, db: self.db };
        f(&txn)
    }

    fn update<T, E, F>(&self, f: F) -> Result<T, E>
    where
        E: From<StoreError>,
        F: FnOnce(&mut dyn WriteTransaction) -> Result<T, E>,
    {
        let txn = self.env.write_txn().map_err(|e| E::from(backend(e)))?;
        let mut txn = LmdbWriteTransaction { txn, db: self.db };
        // An early return drops the transaction, aborting it.
        let value = f(&mut txn)?;
        txn.txn.commit().map_err(|e| E::from(backend(e)))?;
        Ok(value)
    }
}
