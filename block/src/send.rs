//! Send block — moves funds out of an account.

use crate::error::BlockError;
use crate::open::array;
use rano_crypto::blake2b_256_multi;
use rano_types::{Address, Balance, BlockHash, Signature};

/// Encoded body size: previous + destination + balance + signature + work.
pub const SEND_BODY_SIZE: usize = 32 + 32 + 16 + 64 + 8;

/// Sends funds to `destination`.
///
/// `balance` is the *remaining* balance of the sending account after the
/// send, not the amount transferred. The amount is the difference against
/// the account's balance at `previous`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SendBlock {
    /// Hash of the account's current head block.
    pub previous: BlockHash,
    /// Account receiving the funds.
    pub destination: Address,
    /// The sender's balance after this block.
    pub balance: Balance,
    pub signature: Signature,
    pub work: u64,
}

impl SendBlock {
    /// Hash over previous, destination, balance (big-endian).
    pub fn hash(&self) -> BlockHash {
        BlockHash::new(blake2b_256_multi(&[
            self.previous.as_bytes(),
            self.destination.as_bytes(),
            &self.balance.to_wire_bytes(),
        ]))
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(SEND_BODY_SIZE);
        out.extend_from_slice(self.previous.as_bytes());
        out.extend_from_slice(self.destination.as_bytes());
        out.extend_from_slice(&self.balance.to_wire_bytes());
        out.extend_from_slice(self.signature.as_bytes());
        out.extend_from_slice(&self.work.to_le_bytes());
        out
    }

    pub fn decode(data: &[u8]) -> Result<Self, BlockError> {
        if data.len() != SEND_BODY_SIZE {
            return Err(BlockError::BadLength {
                expected: SEND_BODY_SIZE,
                got: data.len(),
            });
        }
        Ok(Self {
            previous: BlockHash::new(array(&data[0..32])),
            destination: Address::new(array(&data[32..64])),
            balance: Balance::from_wire_bytes(array(&data[64..80])),
            signature: Signature(array(&data[80..144])),
            work: u64::from_le_bytes(array(&data[144..152])),
        })
    }
}
