use proptest::prelude::*;

use rano_types::{Address, Balance, BlockHash, Unit};

proptest! {
    /// BlockHash roundtrip: new -> as_bytes -> new produces identical hash.
    #[test]
    fn block_hash_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = BlockHash::new(bytes);
        prop_assert_eq!(hash.as_bytes(), &bytes);
    }

    /// BlockHash::is_zero is true only for all-zero bytes.
    #[test]
    fn block_hash_is_zero_correct(bytes in prop::array::uniform32(0u8..)) {
        let hash = BlockHash::new(bytes);
        prop_assert_eq!(hash.is_zero(), bytes == [0u8; 32]);
    }

    /// Address roundtrip through its public-key view.
    #[test]
    fn address_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let address = Address::new(bytes);
        prop_assert_eq!(Address::from(&address.as_public_key()), address);
    }

    /// Balance survives both byte orders.
    #[test]
    fn balance_byte_roundtrips(raw in any::<u128>()) {
        let balance = Balance::new(raw);
        prop_assert_eq!(Balance::from_wire_bytes(balance.to_wire_bytes()), balance);
        prop_assert_eq!(Balance::from_store_bytes(balance.to_store_bytes()), balance);
        prop_assert_eq!(Balance::from_store_slice(&balance.to_store_bytes()).unwrap(), balance);
    }

    /// Wire (big-endian) and store (little-endian) encodings mirror each other.
    #[test]
    fn balance_byte_orders_are_mirrored(raw in any::<u128>()) {
        let balance = Balance::new(raw);
        let mut wire = balance.to_wire_bytes().to_vec();
        wire.reverse();
        prop_assert_eq!(wire.as_slice(), &balance.to_store_bytes()[..]);
    }

    /// format -> parse is the identity at full precision, in every unit.
    #[test]
    fn balance_format_parse_identity(raw in any::<u128>(), unit_idx in 0usize..7) {
        let units = [
            Unit::Raw, Unit::Micro, Unit::Milli, Unit::Xrb,
            Unit::Kilo, Unit::Mega, Unit::Giga,
        ];
        let unit = units[unit_idx];
        let balance = Balance::new(raw);
        let text = balance.format(unit, rano_types::balance::BALANCE_MAX_PRECISION);
        prop_assert_eq!(Balance::parse(&text, unit).unwrap(), balance);
    }

    /// Display/FromStr roundtrip (Mxrb at max precision).
    #[test]
    fn balance_display_from_str_identity(raw in any::<u128>()) {
        let balance = Balance::new(raw);
        let parsed: Balance = balance.to_string().parse().unwrap();
        prop_assert_eq!(parsed, balance);
    }

    /// Balance bincode serialization roundtrip.
    #[test]
    fn balance_bincode_roundtrip(raw in any::<u128>()) {
        let balance = Balance::new(raw);
        let encoded = bincode::serialize(&balance).unwrap();
        let decoded: Balance = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, balance);
    }

    /// BlockHash bincode serialization roundtrip.
    #[test]
    fn block_hash_bincode_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = BlockHash::new(bytes);
        let encoded = bincode::serialize(&hash).unwrap();
        let decoded: BlockHash = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, hash);
    }
}
