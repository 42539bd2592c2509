//! Ed25519 key material and signatures.

use crate::hex;
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Raw Ed25519 public-key bytes.
///
/// An [`Address`](crate::Address) is a transparent view over the same 32
/// bytes; signature checks in block admission go through the address side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey(pub [u8; 32]);

/// An Ed25519 secret scalar.
///
/// Deliberately opaque: no `Clone`, no `Debug`, no serde, so key bytes
/// cannot wander into logs or wire payloads by accident — the only
/// sanctioned exit is the signing path in `rano_crypto`. The buffer is
/// wiped when the value is dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey(pub [u8; 32]);

/// A 64-byte Ed25519 signature over a block hash.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature(pub [u8; 64]);

/// A public key paired with its secret scalar.
///
/// Built by `rano_crypto::generate_keypair` or
/// `rano_crypto::keypair_from_seed`; carrying both halves in one value
/// keeps test fixtures and wallet call sites from mismatching them.
pub struct KeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
}

impl PublicKey {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl Signature {
    pub const ZERO: Self = Self([0u8; 64]);

    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        hex::write_abbreviated(f, "Signature", &self.0)
    }
}
