use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlockError {
    #[error("unknown block type tag: {0}")]
    UnknownType(u8),

    #[error("bad block body length: expected {expected}, got {got}")]
    BadLength { expected: usize, got: usize },
}
