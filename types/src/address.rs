//! Account address type.
//!
//! An address is the raw 32-byte Ed25519 public key of the account. Signature
//! checks during block admission verify directly against these bytes.

use crate::hex;
use crate::keys::PublicKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Size of an account address in bytes.
pub const ADDRESS_SIZE: usize = 32;

/// An account address — the account's raw Ed25519 public key.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    pub const ZERO: Self = Self([0u8; ADDRESS_SIZE]);

    pub fn new(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    /// Reinterpret the address as the public key it is.
    pub fn as_public_key(&self) -> PublicKey {
        PublicKey(self.0)
    }
}

impl From<&PublicKey> for Address {
    fn from(public: &PublicKey) -> Self {
        Self(public.0)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        hex::write_abbreviated(f, "Address", &self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        hex::write_hex(f, &self.0)
    }
}
