//! Frontier record — the current tip of an account chain.

use rano_types::{Address, BlockHash};

/// Associates an account with its current head block. The store keys
/// frontiers by `hash`; the value is the owning address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frontier {
    /// The account owning this tip.
    pub address: Address,
    /// Hash of the account's head block.
    pub hash: BlockHash,
}
