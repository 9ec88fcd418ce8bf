//! Error Types for the NGX Price Oracle
//!
//! Every failure is synchronous and call-aborting: the whole call's state
//! changes are discarded, there is no partial commit. Retry policy belongs
//! to the caller, never to the registry.

use crate::types::SymbolKey;

/// Result type alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Main error enum for all registry failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    // ============ Authorization Errors ============
    /// Caller is not the current owner
    Unauthorized {
        expected: crate::types::Address,
        actual: crate::types::Address,
    },

    /// Ownership transfer to the null address
    InvalidOwner,

    // ============ Input Errors ============
    /// Empty symbol in a write path
    InvalidSymbol,

    /// Zero price in a write path
    InvalidPrice,

    // ============ Batch Shape Errors ============
    /// Symbol and price arrays differ in length
    LengthMismatch { symbols: usize, prices: usize },

    /// Batch contains no items
    EmptyBatch,

    /// Batch exceeds the per-call item bound
    BatchTooLarge { len: usize, max: usize },

    // ============ Lookup Errors ============
    /// Read or removal of a symbol with no live record
    NotFound { key: SymbolKey },

    /// Enumeration index beyond the current symbol count
    IndexOutOfRange { index: usize, count: usize },
}

impl RegistryError {
    /// Returns a stable error code for logging/indexing
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized { .. } => "E001_UNAUTHORIZED",
            Self::InvalidOwner => "E002_INVALID_OWNER",
            Self::InvalidSymbol => "E010_INVALID_SYMBOL",
            Self::InvalidPrice => "E011_INVALID_PRICE",
            Self::LengthMismatch { .. } => "E020_LENGTH_MISMATCH",
            Self::EmptyBatch => "E021_EMPTY_BATCH",
            Self::BatchTooLarge { .. } => "E022_BATCH_TOO_LARGE",
            Self::NotFound { .. } => "E030_NOT_FOUND",
            Self::IndexOutOfRange { .. } => "E031_INDEX_OUT_OF_RANGE",
        }
    }

    /// Returns true if the caller can fix the error and retry
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidSymbol | Self::InvalidPrice => true,
            Self::LengthMismatch { .. } | Self::EmptyBatch | Self::BatchTooLarge { .. } => true,
            Self::IndexOutOfRange { .. } => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_error_codes_unique() {
        let errors = [
            RegistryError::Unauthorized {
                expected: [1u8; 32],
                actual: [2u8; 32],
            },
            RegistryError::InvalidOwner,
            RegistryError::InvalidSymbol,
            RegistryError::InvalidPrice,
            RegistryError::LengthMismatch {
                symbols: 2,
                prices: 3,
            },
            RegistryError::EmptyBatch,
            RegistryError::BatchTooLarge { len: 51, max: 50 },
            RegistryError::NotFound { key: [0u8; 32] },
            RegistryError::IndexOutOfRange { index: 5, count: 3 },
        ];

        let codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        let unique: BTreeSet<_> = codes.iter().collect();
        assert_eq!(codes.len(), unique.len(), "Error codes must be unique");
    }

    #[test]
    fn test_recoverability() {
        assert!(RegistryError::InvalidPrice.is_recoverable());
        assert!(RegistryError::EmptyBatch.is_recoverable());
        assert!(!RegistryError::InvalidOwner.is_recoverable());
        assert!(!RegistryError::Unauthorized {
            expected: [1u8; 32],
            actual: [2u8; 32],
        }
        .is_recoverable());
    }
}
