//! Per-account state record.

use crate::error::StoreError;
use rano_types::{Balance, BlockHash};

/// Encoded size: three hashes plus a balance.
pub const ADDRESS_INFO_SIZE: usize = 32 + 32 + 32 + 16;

/// State of an account that has received its first block.
///
/// `head_block` tracks the chain tip, `rep_block` the most recent block
/// (open or change) that named the account's representative, and
/// `open_block` never changes after the account is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressInfo {
    pub head_block: BlockHash,
    pub rep_block: BlockHash,
    pub open_block: BlockHash,
    pub balance: Balance,
}

impl AddressInfo {
    /// Encode as `head ++ rep ++ open ++ balance_le`.
    pub fn encode(&self) -> [u8; ADDRESS_INFO_SIZE] {
        let mut out = [0u8; ADDRESS_INFO_SIZE];
        out[0..32].copy_from_slice(self.head_block.as_bytes());
        out[32..64].copy_from_slice(self.rep_block.as_bytes());
        out[64..96].copy_from_slice(self.open_block.as_bytes());
        out[96..112].copy_from_slice(&self.balance.to_store_bytes());
        out
    }

    pub fn decode(data: &[u8]) -> Result<Self, StoreError> {
        if data.len() != ADDRESS_INFO_SIZE {
            return Err(StoreError::Corruption(format!(
                "address info must be {ADDRESS_INFO_SIZE} bytes, got {}",
                data.len()
            )));
        }
        let mut hash = [0u8; 32];
        hash.copy_from_slice(&data[0..32]);
        let head_block = BlockHash::new(hash);
        hash.copy_from_slice(&data[32..64]);
        let rep_block = BlockHash::new(hash);
        hash.copy_from_slice(&data[64..96]);
        let open_block = BlockHash::new(hash);
        let balance = Balance::from_store_slice(&data[96..112])
            .map_err(|e| StoreError::Corruption(e.to_string()))?;
        Ok(Self {
            head_block,
            rep_block,
            open_block,
            balance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_identity() {
        let info = AddressInfo {
            head_block: BlockHash::new([0x01; 32]),
            rep_block: BlockHash::new([0x02; 32]),
            open_block: BlockHash::new([0x03; 32]),
            balance: Balance::new(0xDEAD_BEEF),
        };
        let bytes = info.encode();
        assert_eq!(bytes.len(), ADDRESS_INFO_SIZE);
        assert_eq!(AddressInfo::decode(&bytes).unwrap(), info);
    }

    #[test]
    fn balance_is_little_endian_in_storage() {
        let info = AddressInfo {
            head_block: BlockHash::ZERO,
            rep_block: BlockHash::ZERO,
            open_block: BlockHash::ZERO,
            balance: Balance::new(1),
        };
        let bytes = info.encode();
        assert_eq!(bytes[96], 1);
        assert_eq!(bytes[111], 0);
    }

    #[test]
    fn decode_rejects_bad_length() {
        assert!(matches!(
            AddressInfo::decode(&[0u8; 111]),
            Err(StoreError::Corruption(_))
        ));
    }
}
