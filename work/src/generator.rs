//! Brute-force work generation.
//!
//! Single-threaded nonce search, suitable for tests and low thresholds.
//! Production wallets would parallelise this or offload it to hardware.

use crate::error::WorkError;
use crate::validator::validate_work;
use rano_types::BlockHash;

/// Find a nonce whose work value meets `threshold` for the given root.
pub fn generate_work(root: &BlockHash, threshold: u64) -> Result<u64, WorkError> {
    for nonce in 0..u64::MAX {
        if validate_work(root, nonce, threshold) {
            return Ok(nonce);
        }
    }
    Err(WorkError::Exhausted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_work_at_modest_threshold() {
        let root = BlockHash::new([0xDE; 32]);
        let threshold = 0xF000_0000_0000_0000;
        let nonce = generate_work(&root, threshold).unwrap();
        assert!(validate_work(&root, nonce, threshold));
    }

    #[test]
    fn zero_threshold_returns_immediately() {
        let root = BlockHash::new([0u8; 32]);
        assert_eq!(generate_work(&root, 0).unwrap(), 0);
    }
}
