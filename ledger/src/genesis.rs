//! Deterministic development genesis.
//!
//! Production networks hand the ledger their own genesis block and balance
//! through [`LedgerOptions`]; the dev fixture exists so the full bootstrap
//! path — signature verification included — can run in tests without a
//! network's published constants. The seed is public, so dev balances are
//! worthless by construction.

use rano_block::OpenBlock;
use rano_crypto::{keypair_from_seed, sign_message};
use rano_types::{Address, Balance, BlockHash, Signature};
use rano_work::generate_work;

use crate::ledger::LedgerOptions;

/// Published seed of the dev-network genesis key.
pub const DEV_GENESIS_SEED: [u8; 32] = *b"rano dev network genesis seed 00";

/// Work threshold for the dev network; one in sixteen nonces passes, so
/// tests can grind work in microseconds.
pub const DEV_WORK_THRESHOLD: u64 = 0xF000_0000_0000_0000;

/// Build the dev-network genesis block and its initial balance (the whole
/// 128-bit supply, as usual for a block-lattice).
///
/// The block is self-referential the way network geneses are: its source
/// is the genesis account itself, and the account is its own
/// representative.
pub fn dev_genesis() -> (OpenBlock, Balance) {
    let keypair = keypair_from_seed(&DEV_GENESIS_SEED);
    let address = Address::from(&keypair.public);

    let mut open = OpenBlock {
        address,
        representative: address,
        source: BlockHash::new(*address.as_bytes()),
        signature: Signature::ZERO,
        work: 0,
    };

    open.signature = sign_message(open.hash().as_bytes(), &keypair.private);
    // A failed search would only draw the genesis work warning.
    open.work = generate_work(&open.source, DEV_WORK_THRESHOLD).unwrap_or_default();

    (open, Balance::MAX)
}

impl LedgerOptions {
    /// Options for a throwaway dev-network ledger.
    pub fn dev() -> Self {
        let (genesis_block, genesis_balance) = dev_genesis();
        Self {
            genesis_block,
            genesis_balance,
            work_threshold: DEV_WORK_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rano_block::Block;

    #[test]
    fn dev_genesis_is_deterministic() {
        let (a, _) = dev_genesis();
        let (b, _) = dev_genesis();
        assert_eq!(a, b);
    }

    #[test]
    fn dev_genesis_is_signed_and_worked() {
        let (open, balance) = dev_genesis();
        let block = Block::Open(open.clone());
        assert!(block.verify_signature(&open.address));
        assert!(block.verify_work(DEV_WORK_THRESHOLD));
        assert_eq!(balance, Balance::MAX);
    }

    #[test]
    fn dev_genesis_is_self_referential() {
        let (open, _) = dev_genesis();
        assert_eq!(open.representative, open.address);
        assert_eq!(open.source, BlockHash::new(*open.address.as_bytes()));
    }
}
