//! Receive block — claims a pending send on an existing account.

use crate::error::BlockError;
use crate::open::array;
use rano_crypto::blake2b_256_multi;
use rano_types::{BlockHash, Signature};

/// Encoded body size: previous + source + signature + work.
pub const RECEIVE_BODY_SIZE: usize = 32 + 32 + 64 + 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceiveBlock {
    /// Hash of the account's current head block.
    pub previous: BlockHash,
    /// Hash of the send block being claimed.
    pub source: BlockHash,
    pub signature: Signature,
    pub work: u64,
}

impl ReceiveBlock {
    /// Hash over previous, source.
    pub fn hash(&self) -> BlockHash {
        BlockHash::new(blake2b_256_multi(&[
            self.previous.as_bytes(),
            self.source.as_bytes(),
        ]))
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(RECEIVE_BODY_SIZE);
        out.extend_from_slice(self.previous.as_bytes());
        out.extend_from_slice(self.source.as_bytes());
        out.extend_from_slice(self.signature.as_bytes());
        out.extend_from_slice(&self.work.to_le_bytes());
        out
    }

    pub fn decode(data: &[u8]) -> Result<Self, BlockError> {
        if data.len() != RECEIVE_BODY_SIZE {
            return Err(BlockError::BadLength {
                expected: RECEIVE_BODY_SIZE,
                got: data.len(),
            });
        }
        Ok(Self {
            previous: BlockHash::new(array(&data[0..32])),
            source: BlockHash::new(array(&data[32..64])),
            signature: Signature(array(&data[64..128])),
            work: u64::from_le_bytes(array(&data[128..136])),
        })
    }
}
