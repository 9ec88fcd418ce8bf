//! Protocol Constants
//!
//! All magic numbers and configuration values for the NGX price oracle.
//! Price math follows the original 18-decimal fixed-point convention
//! (1 NGN = 10^18 base units, the same scale the host ledger used).

/// Price representation
pub mod price {
    /// Implied decimal places in every stored price
    pub const DECIMALS: u8 = 18;
    /// One unit with decimals (1 NGN = 10^18 base units)
    pub const ONE: u128 = 1_000_000_000_000_000_000;
}

/// Registry limits
pub mod registry {
    /// Width of a derived symbol key in bytes
    pub const SYMBOL_KEY_WIDTH: usize = 32;
    /// Smallest batch a single call may carry
    pub const MIN_BATCH_SIZE: usize = 1;
    /// Largest batch a single call may carry
    pub const MAX_BATCH_SIZE: usize = 50;
}

/// Keeper defaults (off-chain update agent)
pub mod keeper {
    /// Seconds between update cycles (15 minutes)
    pub const UPDATE_INTERVAL_SECS: u64 = 15 * 60;
    /// Minimum relative price change worth pushing on-chain (0.5%)
    pub const MIN_PRICE_CHANGE_BPS: u64 = 50;
    /// Default number of symbols per submitted batch
    pub const DEFAULT_CHUNK_SIZE: usize = 20;
    /// Basis points denominator
    pub const BPS_DENOMINATOR: u128 = 10_000;
}
