//! Block model for the rano block-lattice.
//!
//! Four block kinds make up an account chain: an [`OpenBlock`] creates the
//! account by claiming a send, [`SendBlock`] moves funds out, [`ReceiveBlock`]
//! claims an incoming send, and [`ChangeBlock`] re-delegates voting weight.
//! [`Block`] is the exhaustive sum over them.
//!
//! A block's hash covers its semantic fields only — never the signature or
//! the work nonce — so signing and work generation can happen after the hash
//! is fixed.

pub mod block;
pub mod change;
pub mod error;
pub mod frontier;
pub mod open;
pub mod receive;
pub mod send;

pub use block::{Block, BlockType};
pub use change::ChangeBlock;
pub use error::BlockError;
pub use frontier::Frontier;
pub use open::OpenBlock;
pub use receive::ReceiveBlock;
pub use send::SendBlock;
