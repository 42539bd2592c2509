use thiserror::Error;

/// Errors surfaced by storage backends.
///
/// `BlockExists` and `WeightUnderflow` have stable identities: the ledger
/// dispatches on them when classifying failed block submissions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("block already exists")]
    BlockExists,

    #[error("duplicate key: {0}")]
    Duplicate(&'static str),

    #[error("key not found: {0}")]
    NotFound(&'static str),

    #[error("representation weight underflow")]
    WeightUnderflow,

    #[error("representation weight overflow")]
    WeightOverflow,

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("stored value is corrupted: {0}")]
    Corruption(String),
}

impl StoreError {
    /// Whether this error is the backend's "no such key" signal.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
