//! Ledger core for the rano block-lattice.
//!
//! Each account has its own chain; chains interlink through send →
//! receive/open pairings. The ledger validates incoming signed blocks and
//! applies them atomically to a storage backend, maintaining the derived
//! indexes (per-account state, frontiers, pending receives, representative
//! voting weights) required to validate what comes next.

pub mod error;
pub mod genesis;
pub mod ledger;
pub mod unchecked;

pub use error::LedgerError;
pub use genesis::{dev_genesis, DEV_GENESIS_SEED, DEV_WORK_THRESHOLD};
pub use ledger::{Ledger, LedgerOptions};
pub use unchecked::{DiscardUnchecked, UncheckedMap, UncheckedSink};
