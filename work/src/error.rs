use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkError {
    #[error("nonce space exhausted without meeting the threshold")]
    Exhausted,
}
