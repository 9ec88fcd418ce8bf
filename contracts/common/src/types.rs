//! Core Types for the NGX Price Oracle
//!
//! Fundamental data structures shared by the registry contract and the
//! keeper planning helpers.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// Type alias for addresses (32-byte hash)
pub type Address = [u8; 32];

/// Fixed-width symbol key derived from a ticker string
pub type SymbolKey = [u8; 32];

/// The null address; never a valid owner
pub const ZERO_ADDRESS: Address = [0u8; 32];

// ============ Price Record ============

/// Stored price entry for one symbol key.
///
/// A record is created on the first successful write for its key and is
/// never deleted afterwards; removal marks it dead and zeroes its fields.
/// Liveness, not the field values, gates read visibility.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct PriceRecord {
    /// Price in NGN base units (18 implied decimals); > 0 while live
    pub price: u128,
    /// Unix seconds of the last write, supplied by the host
    pub last_updated: u64,
    /// Whether the record is currently visible to reads
    pub is_live: bool,
}

impl PriceRecord {
    /// Create a live record from a first write
    pub fn new(price: u128, now: u64) -> Self {
        Self {
            price,
            last_updated: now,
            is_live: true,
        }
    }

    /// Overwrite price and timestamp in place, reviving a dead record
    pub fn set(&mut self, price: u128, now: u64) {
        self.price = price;
        self.last_updated = now;
        self.is_live = true;
    }

    /// Mark the record dead and zero its observable fields
    pub fn clear(&mut self) {
        self.price = 0;
        self.last_updated = 0;
        self.is_live = false;
    }
}

// ============ Keeper Quote ============

/// A fetched market quote the keeper considers pushing on-chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct Quote {
    /// Human-readable ticker (e.g., "DANGCEM")
    pub symbol: String,
    /// Price in NGN base units (18 implied decimals)
    pub price: u128,
}

impl Quote {
    pub fn new(symbol: impl Into<String>, price: u128) -> Self {
        Self {
            symbol: symbol.into(),
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_lifecycle() {
        let mut record = PriceRecord::new(450 * crate::constants::price::ONE, 1_700_000_000);
        assert!(record.is_live);
        assert!(record.price > 0);

        record.clear();
        assert!(!record.is_live);
        assert_eq!(record.price, 0);
        assert_eq!(record.last_updated, 0);

        record.set(12 * crate::constants::price::ONE, 1_700_000_900);
        assert!(record.is_live);
        assert_eq!(record.last_updated, 1_700_000_900);
    }

    #[test]
    fn test_record_borsh_round_trip() {
        let record = PriceRecord::new(1_500_000_000_000_000_000, 1_700_000_000);
        let bytes = borsh::to_vec(&record).unwrap();
        let restored: PriceRecord = borsh::from_slice(&bytes).unwrap();
        assert_eq!(record, restored);
    }
}
