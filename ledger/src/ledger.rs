//! Block admission and derived-index maintenance.
//!
//! Every operation runs inside a single storage transaction: either the
//! block is fully applied — body stored, account state advanced, frontier
//! moved, pending and representation tables adjusted — or nothing is.

use tracing::{debug, warn};

use rano_block::{Block, ChangeBlock, Frontier, OpenBlock, ReceiveBlock, SendBlock};
use rano_store::{AddressInfo, Pending, Store, StoreError, WriteTransaction};
use rano_types::{Address, Balance, BlockHash};

use crate::error::LedgerError;
use crate::unchecked::UncheckedSink;

/// Network parameters the ledger is opened with.
#[derive(Debug)]
pub struct LedgerOptions {
    /// The designated genesis open block.
    pub genesis_block: OpenBlock,
    /// Initial balance credited to the genesis account.
    pub genesis_balance: Balance,
    /// Proof-of-work threshold every block must meet.
    pub work_threshold: u64,
}

/// The ledger: validates blocks and applies them to a storage backend.
#[derive(Debug)]
pub struct Ledger<S: Store> {
    store: S,
    opts: LedgerOptions,
}

impl<S: Store> Ledger<S> {
    /// Open a ledger over `store`, installing the genesis block on first
    /// use. On subsequent opens the stored genesis must match, otherwise
    /// [`LedgerError::BadGenesis`] is returned.
    pub fn new(store: S, opts: LedgerOptions) -> Result<Self, LedgerError> {
        let ledger = Self { store, opts };
        ledger.install_genesis()?;
        Ok(ledger)
    }

    /// Direct access to the backing store, for read transactions outside
    /// the ledger's own operations.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn install_genesis(&self) -> Result<(), LedgerError> {
        let genesis = &self.opts.genesis_block;
        let block = Block::Open(genesis.clone());
        let hash = block.hash();

        // Genesis work is checked but only warned about.
        if !block.verify_work(self.opts.work_threshold) {
            warn!(%hash, "bad work for genesis block");
        }

        if !block.verify_signature(&genesis.address) {
            return Err(LedgerError::BadSignature);
        }

        self.store.update(|txn| {
            if !txn.empty()? {
                // A populated store must contain this exact genesis.
                if txn.has_block(&hash)? {
                    return Ok(());
                }
                return Err(LedgerError::BadGenesis);
            }

            txn.add_block(&block)?;

            let info = AddressInfo {
                head_block: hash,
                rep_block: hash,
                open_block: hash,
                balance: self.opts.genesis_balance,
            };
            txn.add_address(&genesis.address, &info)?;

            txn.add_frontier(&Frontier {
                address: genesis.address,
                hash,
            })?;

            // There is no pending receive carrying the initial supply, so
            // the genesis representative is credited directly.
            txn.add_representation(&genesis.representative, self.opts.genesis_balance)?;

            Ok(())
        })
    }

    /// Validate and apply a single block in one write transaction.
    pub fn add_block(&self, block: &Block) -> Result<(), LedgerError> {
        self.store.update(|txn| self.apply(txn, block))
    }

    /// Apply a batch of blocks, classifying failures instead of aborting:
    /// already-known blocks are skipped silently, blocks with a missing
    /// predecessor or source are handed to `unchecked`, and anything else
    /// is logged and skipped. Returns the number of blocks applied.
    pub fn add_blocks(&self, blocks: &[Block], unchecked: &mut dyn UncheckedSink) -> usize {
        let mut added = 0;
        for block in blocks {
            match self.add_block(block) {
                Ok(()) => {
                    debug!(hash = %block.hash(), "added block");
                    added += 1;
                }
                Err(LedgerError::BlockExists) => {}
                Err(LedgerError::MissingPrevious) => unchecked.gap_previous(block.clone()),
                Err(LedgerError::MissingSource) => unchecked.gap_source(block.clone()),
                Err(err) => {
                    warn!(hash = %block.hash(), error = %err, "error adding block");
                }
            }
        }
        added
    }

    fn apply(&self, txn: &mut dyn WriteTransaction, block: &Block) -> Result<(), LedgerError> {
        if !block.verify_work(self.opts.work_threshold) {
            return Err(LedgerError::BadWork);
        }

        let hash = block.hash();
        if txn.has_block(&hash)? {
            return Err(LedgerError::BlockExists);
        }

        // The root is the previous block for send/receive/change and the
        // claimed send for open, so this doubles as the source-existence
        // check on open blocks.
        if !txn.has_block(&block.root())? {
            return Err(LedgerError::MissingPrevious);
        }

        match block {
            Block::Open(b) => self.apply_open(txn, block, b, hash),
            Block::Send(b) => self.apply_send(txn, block, b, hash),
            Block::Receive(b) => self.apply_receive(txn, block, b, hash),
            Block::Change(b) => self.apply_change(txn, block, b, hash),
        }
    }

    fn apply_open(
        &self,
        txn: &mut dyn WriteTransaction,
        block: &Block,
        b: &OpenBlock,
        hash: BlockHash,
    ) -> Result<(), LedgerError> {
        // An open block is signed by the account it creates.
        if !block.verify_signature(&b.address) {
            return Err(LedgerError::BadSignature);
        }

        match txn.get_address(&b.address) {
            Ok(_) => return Err(LedgerError::AccountExists),
            Err(err) if err.is_not_found() => {}
            Err(err) => return Err(err.into()),
        }

        let pending = get_pending_or_missing_source(txn, &b.address, &b.source)?;

        let info = AddressInfo {
            head_block: hash,
            rep_block: hash,
            open_block: hash,
            balance: pending.amount,
        };
        txn.add_address(&b.address, &info)?;

        txn.delete_pending(&b.address, &b.source)?;

        txn.add_representation(&b.representative, pending.amount)?;

        txn.add_frontier(&Frontier {
            address: b.address,
            hash,
        })?;

        txn.add_block(block)?;
        Ok(())
    }

    fn apply_send(
        &self,
        txn: &mut dyn WriteTransaction,
        block: &Block,
        b: &SendBlock,
        hash: BlockHash,
    ) -> Result<(), LedgerError> {
        // The previous block must be the account's frontier. A missing
        // frontier on an existing block indicates a fork; resolution is
        // out of scope, so the lookup error is returned as-is.
        let frontier = txn.get_frontier(&b.previous)?;

        if !block.verify_signature(&frontier.address) {
            return Err(LedgerError::BadSignature);
        }

        let mut info = txn.get_address(&frontier.address)?;
        if info.head_block != frontier.hash {
            return Err(LedgerError::UnexpectedHead);
        }

        // The block carries the remaining balance; the spend is the
        // difference, and it must be strictly positive.
        let amount = match info.balance.checked_sub(b.balance) {
            Some(amount) if !amount.is_zero() => amount,
            _ => return Err(LedgerError::NegativeOrZeroSpend),
        };

        txn.add_pending(
            &b.destination,
            &hash,
            &Pending {
                address: frontier.address,
                amount,
            },
        )?;

        info.head_block = hash;
        info.balance = b.balance;
        txn.update_address(&frontier.address, &info)?;

        let representative = self.representative_of(txn, &frontier.address)?;
        txn.sub_representation(&representative, b.balance)?;

        txn.delete_frontier(&b.previous)?;
        txn.add_frontier(&Frontier {
            address: frontier.address,
            hash,
        })?;

        txn.add_block(block)?;
        Ok(())
    }

    fn apply_receive(
        &self,
        txn: &mut dyn WriteTransaction,
        block: &Block,
        b: &ReceiveBlock,
        hash: BlockHash,
    ) -> Result<(), LedgerError> {
        let frontier = txn.get_frontier(&b.previous)?;

        if !block.verify_signature(&frontier.address) {
            return Err(LedgerError::BadSignature);
        }

        let mut info = txn.get_address(&frontier.address)?;
        if info.head_block != frontier.hash {
            return Err(LedgerError::UnexpectedHead);
        }

        let pending = get_pending_or_missing_source(txn, &frontier.address, &b.source)?;

        info.head_block = hash;
        info.balance = info
            .balance
            .checked_add(pending.amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        txn.update_address(&frontier.address, &info)?;

        txn.delete_pending(&frontier.address, &b.source)?;

        let representative = self.representative_of(txn, &frontier.address)?;
        txn.add_representation(&representative, pending.amount)?;

        txn.delete_frontier(&b.previous)?;
        txn.add_frontier(&Frontier {
            address: frontier.address,
            hash,
        })?;

        txn.add_block(block)?;
        Ok(())
    }

    fn apply_change(
        &self,
        txn: &mut dyn WriteTransaction,
        block: &Block,
        b: &ChangeBlock,
        hash: BlockHash,
    ) -> Result<(), LedgerError> {
        let frontier = txn.get_frontier(&b.previous)?;

        if !block.verify_signature(&frontier.address) {
            return Err(LedgerError::BadSignature);
        }

        let mut info = txn.get_address(&frontier.address)?;
        if info.head_block != frontier.hash {
            return Err(LedgerError::UnexpectedHead);
        }

        // Resolve the outgoing representative before rep_block is
        // repointed at this block.
        let old_representative = representative_from(txn, &info)?;

        info.head_block = hash;
        info.rep_block = hash;
        txn.update_address(&frontier.address, &info)?;

        txn.sub_representation(&old_representative, info.balance)?;
        txn.add_representation(&b.representative, info.balance)?;

        txn.delete_frontier(&b.previous)?;
        txn.add_frontier(&Frontier {
            address: frontier.address,
            hash,
        })?;

        txn.add_block(block)?;
        Ok(())
    }

    /// The representative an account currently delegates to: the one named
    /// by the account's `rep_block`, which is always an open or change
    /// block. Anything else is a data-integrity failure.
    fn representative_of(
        &self,
        txn: &dyn WriteTransaction,
        address: &Address,
    ) -> Result<Address, LedgerError> {
        let info = txn.get_address(address)?;
        representative_from(txn, &info)
    }

    // ── Read-side helpers ───────────────────────────────────────────────

    pub fn count_blocks(&self) -> Result<u64, LedgerError> {
        self.store.view(|txn| Ok(txn.count_blocks()?))
    }

    pub fn count_frontiers(&self) -> Result<u64, LedgerError> {
        self.store.view(|txn| Ok(txn.count_frontiers()?))
    }

    pub fn frontiers(&self) -> Result<Vec<Frontier>, LedgerError> {
        self.store.view(|txn| Ok(txn.frontiers()?))
    }

    pub fn account_info(&self, address: &Address) -> Result<AddressInfo, LedgerError> {
        self.store.view(|txn| Ok(txn.get_address(address)?))
    }

    pub fn pending(
        &self,
        destination: &Address,
        source: &BlockHash,
    ) -> Result<Pending, LedgerError> {
        self.store
            .view(|txn| Ok(txn.get_pending(destination, source)?))
    }

    pub fn representation(&self, representative: &Address) -> Result<Balance, LedgerError> {
        self.store
            .view(|txn| Ok(txn.get_representation(representative)?))
    }
}

fn representative_from(
    txn: &dyn WriteTransaction,
    info: &AddressInfo,
) -> Result<Address, LedgerError> {
    match txn.get_block(&info.rep_block)? {
        Block::Open(b) => Ok(b.representative),
        Block::Change(b) => Ok(b.representative),
        _ => Err(LedgerError::BadRepresentativeBlockType),
    }
}

/// A missing pending record means the referenced send either never existed
/// for this destination or has already been claimed.
fn get_pending_or_missing_source(
    txn: &dyn WriteTransaction,
    destination: &Address,
    source: &BlockHash,
) -> Result<Pending, LedgerError> {
    match txn.get_pending(destination, source) {
        Ok(pending) => Ok(pending),
        Err(StoreError::NotFound(_)) => Err(LedgerError::MissingSource),
        Err(err) => Err(err.into()),
    }
}
