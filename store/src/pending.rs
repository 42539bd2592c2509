//! Pending receive record.

use crate::error::StoreError;
use rano_types::{Address, Balance};

/// Encoded size: originating address plus amount.
pub const PENDING_SIZE: usize = 32 + 16;

/// A send that has not yet been claimed by its destination.
///
/// Keyed in the store by `(destination, send block hash)`; the record holds
/// the originating account and the amount in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pending {
    /// Account the funds came from.
    pub address: Address,
    /// Amount carried by the send.
    pub amount: Balance,
}

impl Pending {
    /// Encode as `address ++ amount_le`.
    pub fn encode(&self) -> [u8; PENDING_SIZE] {
        let mut out = [0u8; PENDING_SIZE];
        out[0..32].copy_from_slice(self.address.as_bytes());
        out[32..48].copy_from_slice(&self.amount.to_store_bytes());
        out
    }

    pub fn decode(data: &[u8]) -> Result<Self, StoreError> {
        if data.len() != PENDING_SIZE {
            return Err(StoreError::Corruption(format!(
                "pending record must be {PENDING_SIZE} bytes, got {}",
                data.len()
            )));
        }
        let mut addr = [0u8; 32];
        addr.copy_from_slice(&data[0..32]);
        let amount = Balance::from_store_slice(&data[32..48])
            .map_err(|e| StoreError::Corruption(e.to_string()))?;
        Ok(Self {
            address: Address::new(addr),
            amount,
        })
    }
}
