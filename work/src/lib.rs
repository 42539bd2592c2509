//! Proof-of-work for the rano ledger.
//!
//! Every block carries a 64-bit nonce. The work digest is the first eight
//! bytes (little-endian) of Blake2b-256 over `nonce_le ++ root`, where the
//! root is the hash the block extends. A block is valid when the digest
//! value meets the network threshold.

pub mod error;
pub mod generator;
pub mod validator;

pub use error::WorkError;
pub use generator::generate_work;
pub use validator::{validate_work, work_value};

/// Mainnet work threshold.
pub const WORK_THRESHOLD: u64 = 0xffff_ffc0_0000_0000;
