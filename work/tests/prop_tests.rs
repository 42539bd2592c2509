use proptest::prelude::*;

use rano_types::BlockHash;
use rano_work::{generate_work, validate_work};

proptest! {
    /// Generated PoW always passes its own validation.
    #[test]
    fn generated_pow_always_valid(
        root_byte in 0u8..=255,
        threshold in 0u64..=0xF000_0000_0000_0000,
    ) {
        let root = BlockHash::new([root_byte; 32]);
        let nonce = generate_work(&root, threshold).unwrap();
        prop_assert!(
            validate_work(&root, nonce, threshold),
            "generated nonce must pass validation"
        );
    }

    /// Zero threshold always passes regardless of nonce.
    #[test]
    fn zero_threshold_always_passes(
        root_bytes in prop::array::uniform32(0u8..),
        nonce in any::<u64>(),
    ) {
        let root = BlockHash::new(root_bytes);
        prop_assert!(
            validate_work(&root, nonce, 0),
            "zero threshold must always pass"
        );
    }

    /// Validation is deterministic: same inputs produce same result.
    #[test]
    fn validation_is_deterministic(
        root_bytes in prop::array::uniform32(0u8..),
        nonce in any::<u64>(),
        threshold in any::<u64>(),
    ) {
        let root = BlockHash::new(root_bytes);
        let r1 = validate_work(&root, nonce, threshold);
        let r2 = validate_work(&root, nonce, threshold);
        prop_assert_eq!(r1, r2, "validation must be deterministic");
    }

    /// A lower threshold is easier to meet: if valid at T, then valid at T-1.
    #[test]
    fn lower_threshold_is_easier(
        root_bytes in prop::array::uniform32(0u8..),
        nonce in any::<u64>(),
        threshold in 1u64..u64::MAX,
    ) {
        let root = BlockHash::new(root_bytes);
        if validate_work(&root, nonce, threshold) {
            prop_assert!(
                validate_work(&root, nonce, threshold - 1),
                "if valid at threshold {}, must be valid at {}",
                threshold,
                threshold - 1
            );
        }
    }
}
