//! Open block — the first block of an account chain.

use crate::error::BlockError;
use rano_crypto::blake2b_256_multi;
use rano_types::{Address, BlockHash, Signature};

/// Encoded body size: source + representative + address + signature + work.
pub const OPEN_BODY_SIZE: usize = 32 + 32 + 32 + 64 + 8;

/// Creates an account by claiming a pending send.
///
/// The `address` is both the new account and the key that must have signed
/// the block. There is no `previous`; the block's root is the send being
/// claimed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenBlock {
    /// The account being opened (its public key).
    pub address: Address,
    /// Representative receiving this account's voting weight.
    pub representative: Address,
    /// Hash of the send block being claimed.
    pub source: BlockHash,
    pub signature: Signature,
    pub work: u64,
}

impl OpenBlock {
    /// Hash over source, representative, address.
    pub fn hash(&self) -> BlockHash {
        BlockHash::new(blake2b_256_multi(&[
            self.source.as_bytes(),
            self.representative.as_bytes(),
            self.address.as_bytes(),
        ]))
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(OPEN_BODY_SIZE);
        out.extend_from_slice(self.source.as_bytes());
        out.extend_from_slice(self.representative.as_bytes());
        out.extend_from_slice(self.address.as_bytes());
        out.extend_from_slice(self.signature.as_bytes());
        out.extend_from_slice(&self.work.to_le_bytes());
        out
    }

    pub fn decode(data: &[u8]) -> Result<Self, BlockError> {
        if data.len() != OPEN_BODY_SIZE {
            return Err(BlockError::BadLength {
                expected: OPEN_BODY_SIZE,
                got: data.len(),
            });
        }
        Ok(Self {
            source: BlockHash::new(array(&data[0..32])),
            representative: Address::new(array(&data[32..64])),
            address: Address::new(array(&data[64..96])),
            signature: Signature(array(&data[96..160])),
            work: u64::from_le_bytes(array(&data[160..168])),
        })
    }
}

/// Copy an exact-length slice into a fixed array. Callers slice to `N` bytes
/// after validating the total body length.
pub(crate) fn array<const N: usize>(data: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(data);
    out
}
