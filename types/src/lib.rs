//! Fundamental types for the rano block-lattice ledger.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: account addresses, block hashes, 128-bit balances, and
//! cryptographic key material.

pub mod address;
pub mod balance;
pub mod hash;
mod hex;
pub mod keys;

pub use address::Address;
pub use balance::{Balance, BalanceError, Unit};
pub use hash::BlockHash;
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
