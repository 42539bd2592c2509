use rano_store::StoreError;
use thiserror::Error;

/// Errors produced by block admission and genesis bootstrap.
///
/// Each variant has a stable identity; batch submission dispatches on
/// `BlockExists`, `MissingPrevious` and `MissingSource`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("bad work")]
    BadWork,

    #[error("genesis block in store doesn't match the given block")]
    BadGenesis,

    #[error("bad block signature")]
    BadSignature,

    #[error("block already exists")]
    BlockExists,

    #[error("previous block does not exist")]
    MissingPrevious,

    #[error("source block does not exist")]
    MissingSource,

    #[error("account already exists")]
    AccountExists,

    #[error("unexpected head block for account")]
    UnexpectedHead,

    #[error("negative or zero spend")]
    NegativeOrZeroSpend,

    #[error("bad representative block type")]
    BadRepresentativeBlockType,

    #[error("balance overflow")]
    BalanceOverflow,

    #[error("representation weight underflow")]
    WeightUnderflow,

    #[error("storage error: {0}")]
    Storage(StoreError),
}

impl From<StoreError> for LedgerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::BlockExists => LedgerError::BlockExists,
            StoreError::WeightUnderflow => LedgerError::WeightUnderflow,
            other => LedgerError::Storage(other),
        }
    }
}
