//! Keeper Planning
//!
//! Pure decision logic for the off-chain update agent: which quotes are
//! worth pushing on-chain, and how to split them into batches the registry
//! will accept. Fetching, signing, and scheduling live in the agent itself
//! and are out of scope here.
//!
//! ## Flow
//!
//! 1. Agent fetches quotes for all tracked tickers.
//! 2. `plan_updates` keeps quotes whose price moved at least
//!    `MIN_PRICE_CHANGE_BPS` against the last pushed value (or that have
//!    never been pushed) and chunks them into registry-sized batches.
//! 3. Agent submits each batch as one `set_prices` call and records the
//!    outcome in `KeeperStats`; retrying a failed batch is the agent's call.

use std::collections::HashMap;

use crate::constants::keeper::BPS_DENOMINATOR;
use crate::constants::registry::MAX_BATCH_SIZE;
use crate::types::Quote;

// ============ Update Filter ============

/// Should this quote be pushed on-chain?
///
/// True when the symbol has never been pushed, the last pushed price was
/// zero, or the relative change meets the threshold.
pub fn should_update(last: Option<u128>, new_price: u128, min_change_bps: u64) -> bool {
    let old = match last {
        None => return true,
        Some(p) => p,
    };
    if old == 0 {
        return true;
    }

    let diff = old.abs_diff(new_price);
    // change_bps = diff * 10000 / old; compare cross-multiplied to avoid
    // truncation dropping sub-bps changes below the threshold
    diff.saturating_mul(BPS_DENOMINATOR) >= old.saturating_mul(min_change_bps as u128)
}

// ============ Update Plan ============

/// The quotes an update cycle will push, pre-chunked into batches
#[derive(Debug, Clone, Default)]
pub struct UpdatePlan {
    /// Batches in submission order, each at most `MAX_BATCH_SIZE` quotes
    pub batches: Vec<Vec<Quote>>,
    /// Quotes skipped because the change was below threshold
    pub skipped: usize,
}

impl UpdatePlan {
    /// Total quotes across all batches
    pub fn quote_count(&self) -> usize {
        self.batches.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}

/// Build an update plan for one cycle.
///
/// Quotes keep their input order. `chunk_size` is the agent's preferred
/// batch size (gas tuning); it is clamped into the registry's accepted
/// range, so every planned batch is submittable as-is.
pub fn plan_updates(
    quotes: &[Quote],
    last_prices: &HashMap<String, u128>,
    min_change_bps: u64,
    chunk_size: usize,
) -> UpdatePlan {
    let mut due: Vec<Quote> = Vec::new();
    let mut skipped = 0;

    for quote in quotes {
        let last = last_prices.get(&quote.symbol).copied();
        if should_update(last, quote.price, min_change_bps) {
            due.push(quote.clone());
        } else {
            skipped += 1;
        }
    }

    let chunk = chunk_size.clamp(1, MAX_BATCH_SIZE);
    let batches = due.chunks(chunk).map(|c| c.to_vec()).collect();

    UpdatePlan { batches, skipped }
}

// ============ Keeper Statistics ============

/// Running counters for a keeper process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeeperStats {
    /// Completed update cycles
    pub cycles: u64,
    /// Batches accepted by the registry
    pub successful_batches: u64,
    /// Batches rejected or dropped
    pub failed_batches: u64,
    /// Total symbols pushed across all accepted batches
    pub symbols_updated: u64,
}

impl KeeperStats {
    pub fn record_cycle(&mut self) {
        self.cycles += 1;
    }

    /// Record one submitted batch outcome
    pub fn record_batch(&mut self, accepted: bool, symbols: usize) {
        if accepted {
            self.successful_batches += 1;
            self.symbols_updated += symbols as u64;
        } else {
            self.failed_batches += 1;
        }
    }
}
