//! Change block — re-delegates an account's voting weight.

use crate::error::BlockError;
use crate::open::array;
use rano_crypto::blake2b_256_multi;
use rano_types::{Address, BlockHash, Signature};

/// Encoded body size: previous + representative + signature + work.
pub const CHANGE_BODY_SIZE: usize = 32 + 32 + 64 + 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeBlock {
    /// Hash of the account's current head block.
    pub previous: BlockHash,
    /// The new representative.
    pub representative: Address,
    pub signature: Signature,
    pub work: u64,
}

impl ChangeBlock {
    /// Hash over previous, representative.
    pub fn hash(&self) -> BlockHash {
        BlockHash::new(blake2b_256_multi(&[
            self.previous.as_bytes(),
            self.representative.as_bytes(),
        ]))
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(CHANGE_BODY_SIZE);
        out.extend_from_slice(self.previous.as_bytes());
        out.extend_from_slice(self.representative.as_bytes());
        out.extend_from_slice(self.signature.as_bytes());
        out.extend_from_slice(&self.work.to_le_bytes());
        out
    }

    pub fn decode(data: &[u8]) -> Result<Self, BlockError> {
        if data.len() != CHANGE_BODY_SIZE {
            return Err(BlockError::BadLength {
                expected: CHANGE_BODY_SIZE,
                got: data.len(),
            });
        }
        Ok(Self {
            previous: BlockHash::new(array(&data[0..32])),
            representative: Address::new(array(&data[32..64])),
            signature: Signature(array(&data[64..128])),
            work: u64::from_le_bytes(array(&data[128..136])),
        })
    }
}
