//! Validation Helpers
//!
//! Centralized precondition checks shared by every mutating endpoint.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ngx_common::validation::{require_price, require_symbol};
//! use ngx_common::check;
//!
//! check!(caller == owner, RegistryError::Unauthorized { expected: owner, actual: caller });
//! require_symbol("DANGCEM")?;
//! require_price(price)?;
//! ```

use crate::constants::registry::{MAX_BATCH_SIZE, MIN_BATCH_SIZE};
use crate::errors::{RegistryError, RegistryResult};

// ============ Validation Macro ============

/// Check a condition and return an error if it fails.
#[macro_export]
macro_rules! check {
    ($condition:expr, $error:expr) => {
        if !($condition) {
            return Err($error);
        }
    };
}

pub use check;

// ============ Precondition Helpers ============

/// A write symbol must be non-empty; key derivation alone would accept it.
pub fn require_symbol(symbol: &str) -> RegistryResult<()> {
    check!(!symbol.is_empty(), RegistryError::InvalidSymbol);
    Ok(())
}

/// A live price is always strictly positive.
pub fn require_price(price: u128) -> RegistryResult<()> {
    check!(price > 0, RegistryError::InvalidPrice);
    Ok(())
}

/// Batch arrays must match in length and fit the per-call bound.
pub fn require_batch_shape(symbols: usize, prices: usize) -> RegistryResult<()> {
    check!(
        symbols == prices,
        RegistryError::LengthMismatch { symbols, prices }
    );
    check!(symbols >= MIN_BATCH_SIZE, RegistryError::EmptyBatch);
    check!(
        symbols <= MAX_BATCH_SIZE,
        RegistryError::BatchTooLarge {
            len: symbols,
            max: MAX_BATCH_SIZE,
        }
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_symbol() {
        assert!(require_symbol("DANGCEM").is_ok());
        assert_eq!(require_symbol(""), Err(RegistryError::InvalidSymbol));
    }

    #[test]
    fn test_require_price() {
        assert!(require_price(1).is_ok());
        assert_eq!(require_price(0), Err(RegistryError::InvalidPrice));
    }

    #[test]
    fn test_batch_shape() {
        assert!(require_batch_shape(3, 3).is_ok());
        assert!(require_batch_shape(MAX_BATCH_SIZE, MAX_BATCH_SIZE).is_ok());

        assert_eq!(
            require_batch_shape(2, 3),
            Err(RegistryError::LengthMismatch {
                symbols: 2,
                prices: 3
            })
        );
        assert_eq!(require_batch_shape(0, 0), Err(RegistryError::EmptyBatch));
        assert_eq!(
            require_batch_shape(51, 51),
            Err(RegistryError::BatchTooLarge { len: 51, max: 50 })
        );
    }
}
