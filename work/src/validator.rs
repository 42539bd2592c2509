//! PoW validation.

use rano_crypto::blake2b_256_multi;
use rano_types::BlockHash;

/// Compute the work value for a nonce against a block root.
pub fn work_value(root: &BlockHash, nonce: u64) -> u64 {
    let digest = blake2b_256_multi(&[&nonce.to_le_bytes(), root.as_bytes()]);
    u64::from_le_bytes([
        digest[0], digest[1], digest[2], digest[3], digest[4], digest[5], digest[6], digest[7],
    ])
}

/// Validate that a work nonce meets the threshold for a given block root.
pub fn validate_work(root: &BlockHash, nonce: u64, threshold: u64) -> bool {
    work_value(root, nonce) >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_work;

    #[test]
    fn zero_threshold_always_passes() {
        let root = BlockHash::new([0xAB; 32]);
        assert!(validate_work(&root, 0, 0));
        assert!(validate_work(&root, 12345, 0));
    }

    #[test]
    fn max_threshold_rejects_arbitrary_nonce() {
        let root = BlockHash::new([0xFF; 32]);
        assert!(!validate_work(&root, 12345, u64::MAX));
    }

    #[test]
    fn generated_nonce_validates_at_and_below_its_value() {
        let root = BlockHash::new([0x42; 32]);
        let threshold = 0xF000_0000_0000_0000;
        let nonce = generate_work(&root, threshold).unwrap();

        assert!(validate_work(&root, nonce, threshold));

        let value = work_value(&root, nonce);
        assert!(!validate_work(&root, nonce, value + 1));
    }

    #[test]
    fn work_is_bound_to_the_root() {
        let root1 = BlockHash::new([0x11; 32]);
        let root2 = BlockHash::new([0x22; 32]);
        assert_ne!(work_value(&root1, 7), work_value(&root2, 7));
    }
}
