//! The block sum type and its common operations.

use crate::change::ChangeBlock;
use crate::error::BlockError;
use crate::open::OpenBlock;
use crate::receive::ReceiveBlock;
use crate::send::SendBlock;
use rano_crypto::{sign_message, verify_signature};
use rano_types::{Address, BlockHash, PrivateKey, Signature};
use rano_work::validate_work;

/// Block type tag, stored alongside the encoded body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum BlockType {
    Open = 0,
    Send = 1,
    Receive = 2,
    Change = 3,
}

impl BlockType {
    pub fn tag(self) -> u8 {
        self as u8
    }

    pub fn from_tag(tag: u8) -> Result<Self, BlockError> {
        match tag {
            0 => Ok(BlockType::Open),
            1 => Ok(BlockType::Send),
            2 => Ok(BlockType::Receive),
            3 => Ok(BlockType::Change),
            other => Err(BlockError::UnknownType(other)),
        }
    }
}

/// A block of any kind. Dispatch is exhaustive — there is no "unknown"
/// variant once a block has been decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Open(OpenBlock),
    Send(SendBlock),
    Receive(ReceiveBlock),
    Change(ChangeBlock),
}

impl Block {
    pub fn block_type(&self) -> BlockType {
        match self {
            Block::Open(_) => BlockType::Open,
            Block::Send(_) => BlockType::Send,
            Block::Receive(_) => BlockType::Receive,
            Block::Change(_) => BlockType::Change,
        }
    }

    /// The block's 32-byte digest over its semantic fields.
    pub fn hash(&self) -> BlockHash {
        match self {
            Block::Open(b) => b.hash(),
            Block::Send(b) => b.hash(),
            Block::Receive(b) => b.hash(),
            Block::Change(b) => b.hash(),
        }
    }

    /// The hash this block extends: `previous` for send/receive/change, the
    /// claimed `source` for open.
    pub fn root(&self) -> BlockHash {
        match self {
            Block::Open(b) => b.source,
            Block::Send(b) => b.previous,
            Block::Receive(b) => b.previous,
            Block::Change(b) => b.previous,
        }
    }

    pub fn signature(&self) -> &Signature {
        match self {
            Block::Open(b) => &b.signature,
            Block::Send(b) => &b.signature,
            Block::Receive(b) => &b.signature,
            Block::Change(b) => &b.signature,
        }
    }

    pub fn work(&self) -> u64 {
        match self {
            Block::Open(b) => b.work,
            Block::Send(b) => b.work,
            Block::Receive(b) => b.work,
            Block::Change(b) => b.work,
        }
    }

    /// Check the proof-of-work nonce against the block's root.
    pub fn verify_work(&self, threshold: u64) -> bool {
        validate_work(&self.root(), self.work(), threshold)
    }

    /// Check that `signer` signed this block's hash.
    pub fn verify_signature(&self, signer: &Address) -> bool {
        let hash = self.hash();
        verify_signature(hash.as_bytes(), self.signature(), &signer.as_public_key())
    }

    /// Sign the block's hash, replacing any existing signature.
    pub fn sign(&mut self, private: &PrivateKey) {
        let signature = sign_message(self.hash().as_bytes(), private);
        match self {
            Block::Open(b) => b.signature = signature,
            Block::Send(b) => b.signature = signature,
            Block::Receive(b) => b.signature = signature,
            Block::Change(b) => b.signature = signature,
        }
    }

    /// Replace the work nonce. Neither the hash nor the signature covers
    /// it, so work can be attached at any point.
    pub fn set_work(&mut self, work: u64) {
        match self {
            Block::Open(b) => b.work = work,
            Block::Send(b) => b.work = work,
            Block::Receive(b) => b.work = work,
            Block::Change(b) => b.work = work,
        }
    }

    /// Encode the block body (without the type tag).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Block::Open(b) => b.encode(),
            Block::Send(b) => b.encode(),
            Block::Receive(b) => b.encode(),
            Block::Change(b) => b.encode(),
        }
    }

    /// Decode a block body for the given type tag.
    pub fn decode(block_type: BlockType, data: &[u8]) -> Result<Self, BlockError> {
        match block_type {
            BlockType::Open => OpenBlock::decode(data).map(Block::Open),
            BlockType::Send => SendBlock::decode(data).map(Block::Send),
            BlockType::Receive => ReceiveBlock::decode(data).map(Block::Receive),
            BlockType::Change => ChangeBlock::decode(data).map(Block::Change),
        }
    }
}
