//! Symbol Price Registry Contract
//!
//! On-chain style key-value store from fixed-width symbol keys to price
//! records, with owner-gated writes and public reads. This is the contract
//! the market and the off-chain keeper talk to.
//!
//! ## State model
//!
//! - `records`: symbol key → price record. Records are created on first
//!   write and never deleted; removal marks them dead and zeroes them.
//! - `symbols` + `index`: ordered key sequence for enumeration plus a side
//!   map from key to its position, kept in lockstep. Removal swaps the
//!   victim with the last element and pops, so enumeration order is not
//!   insertion order once anything has been removed.
//!
//! ## Execution model
//!
//! The host serializes calls; every mutation runs to completion through
//! `&mut self`. "Now" is supplied by the caller from the host's clock.
//! Batches are all-or-nothing: every item is validated before the first
//! write, so a failed call leaves state and event log untouched.

use std::collections::HashMap;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use ngx_common::{
    check,
    errors::{RegistryError, RegistryResult},
    events::{EventLog, RegistryEvent},
    key::symbol_to_key,
    types::{Address, PriceRecord, SymbolKey, ZERO_ADDRESS},
    validation::{require_batch_shape, require_price, require_symbol},
};

// ============ Actions ============

/// Mutating calls accepted at the registry's boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub enum RegistryAction {
    /// Write one price (owner only)
    SetPrice { symbol: String, price: u128 },
    /// Write up to 50 prices atomically (owner only)
    SetPrices {
        symbols: Vec<String>,
        prices: Vec<u128>,
    },
    /// Drop a live symbol from the registry (owner only)
    RemoveSymbol { symbol: String },
    /// Hand the owner credential to a new address (owner only)
    TransferOwnership { new_owner: Address },
}

// ============ Registry State ============

/// The symbol price registry.
///
/// A plain state struct; whoever exposes the call boundary holds it and
/// passes `caller`/`now` in from the host context.
#[derive(Debug, Clone, Default)]
pub struct PriceRegistry {
    /// Single credential allowed to mutate, transferable
    owner: Address,
    /// Key → record; dead records stay behind, zeroed
    records: HashMap<SymbolKey, PriceRecord>,
    /// Enumeration sequence of live keys
    symbols: Vec<SymbolKey>,
    /// Key → position in `symbols`
    index: HashMap<SymbolKey, usize>,
    /// Append-only event log, written only by successful calls
    events: EventLog,
}

impl PriceRegistry {
    /// Create a registry owned by `owner`
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            ..Self::default()
        }
    }

    /// Current owner credential
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Events emitted so far, in call order
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Drain the event log (for an indexer that has consumed it)
    pub fn take_events(&mut self) -> Vec<RegistryEvent> {
        std::mem::take(&mut self.events).into_events()
    }

    // ============ Call Boundary ============

    /// Apply one mutating action on behalf of `caller` at host time `now`.
    pub fn apply(
        &mut self,
        action: RegistryAction,
        caller: Address,
        now: u64,
    ) -> RegistryResult<()> {
        match action {
            RegistryAction::SetPrice { symbol, price } => {
                self.set_price(&symbol, price, caller, now)
            }
            RegistryAction::SetPrices { symbols, prices } => {
                let refs: Vec<&str> = symbols.iter().map(String::as_str).collect();
                self.set_prices(&refs, &prices, caller, now)
            }
            RegistryAction::RemoveSymbol { symbol } => self.remove_symbol(&symbol, caller),
            RegistryAction::TransferOwnership { new_owner } => {
                self.transfer_ownership(new_owner, caller)
            }
        }
    }

    // ============ Mutations ============

    /// Write one price. Creates the record (and appends the key to the
    /// enumeration sequence) on first write; later writes mutate in place.
    pub fn set_price(
        &mut self,
        symbol: &str,
        price: u128,
        caller: Address,
        now: u64,
    ) -> RegistryResult<()> {
        self.require_owner(caller)?;
        require_symbol(symbol)?;
        require_price(price)?;

        let key = self.write_record(symbol, price, now);
        self.events.emit(RegistryEvent::PriceUpdated {
            symbol: symbol.to_string(),
            key,
            price,
            timestamp: now,
        });
        Ok(())
    }

    /// Write a batch of prices atomically, in array order.
    ///
    /// Every item is validated before anything is written, so an invalid
    /// item anywhere fails the whole call with no state change and no
    /// events. A symbol appearing twice ends at its last occurrence.
    pub fn set_prices(
        &mut self,
        symbols: &[&str],
        prices: &[u128],
        caller: Address,
        now: u64,
    ) -> RegistryResult<()> {
        self.require_owner(caller)?;
        require_batch_shape(symbols.len(), prices.len())?;
        for (symbol, &price) in symbols.iter().zip(prices) {
            require_symbol(symbol)?;
            require_price(price)?;
        }

        // Validation passed; nothing below can fail.
        for (symbol, &price) in symbols.iter().zip(prices) {
            let key = self.write_record(symbol, price, now);
            self.events.emit(RegistryEvent::PriceUpdated {
                symbol: symbol.to_string(),
                key,
                price,
                timestamp: now,
            });
        }
        self.events.emit(RegistryEvent::BatchCompleted {
            count: symbols.len() as u32,
            timestamp: now,
        });
        Ok(())
    }

    /// Remove a live symbol: zero its record, drop it from enumeration.
    ///
    /// Swap-with-last-and-pop keeps removal O(1) at the cost of enumeration
    /// order. Removing an already-dead symbol fails with `NotFound`.
    pub fn remove_symbol(&mut self, symbol: &str, caller: Address) -> RegistryResult<()> {
        self.require_owner(caller)?;

        let key = symbol_to_key(symbol);
        let is_live = self.records.get(&key).is_some_and(|r| r.is_live);
        check!(is_live, RegistryError::NotFound { key });

        let pos = self
            .index
            .remove(&key)
            .ok_or(RegistryError::NotFound { key })?;
        let last = self.symbols.len() - 1;
        if pos != last {
            let moved = self.symbols[last];
            self.symbols[pos] = moved;
            self.index.insert(moved, pos);
        }
        self.symbols.pop();

        if let Some(record) = self.records.get_mut(&key) {
            record.clear();
        }
        Ok(())
    }

    /// Hand ownership to `new_owner`, immediately.
    ///
    /// Single-step: there is no pending-owner confirmation, so a mistyped
    /// address locks the registry permanently. Kept for fidelity with the
    /// original contract.
    pub fn transfer_ownership(&mut self, new_owner: Address, caller: Address) -> RegistryResult<()> {
        self.require_owner(caller)?;
        check!(new_owner != ZERO_ADDRESS, RegistryError::InvalidOwner);

        let old_owner = self.owner;
        self.owner = new_owner;
        self.events.emit(RegistryEvent::OwnershipTransferred {
            old_owner,
            new_owner,
        });
        Ok(())
    }

    // ============ Reads (public, never owner-gated) ============

    /// Price and last-update time for a live symbol.
    pub fn get_price(&self, symbol: &str) -> RegistryResult<(u128, u64)> {
        let key = symbol_to_key(symbol);
        match self.records.get(&key) {
            Some(record) if record.is_live => Ok((record.price, record.last_updated)),
            _ => Err(RegistryError::NotFound { key }),
        }
    }

    /// Batch read. Missing or dead entries yield `(0, 0, false)` instead of
    /// failing; the output arrays always match the input length.
    pub fn get_prices(&self, symbols: &[&str]) -> (Vec<u128>, Vec<u64>, Vec<bool>) {
        let mut prices = Vec::with_capacity(symbols.len());
        let mut timestamps = Vec::with_capacity(symbols.len());
        let mut live = Vec::with_capacity(symbols.len());

        for symbol in symbols {
            match self.records.get(&symbol_to_key(symbol)) {
                Some(record) if record.is_live => {
                    prices.push(record.price);
                    timestamps.push(record.last_updated);
                    live.push(true);
                }
                _ => {
                    prices.push(0);
                    timestamps.push(0);
                    live.push(false);
                }
            }
        }
        (prices, timestamps, live)
    }

    /// Does a live record exist for this symbol?
    pub fn exists(&self, symbol: &str) -> bool {
        self.records
            .get(&symbol_to_key(symbol))
            .is_some_and(|r| r.is_live)
    }

    /// Number of live symbols
    pub fn count(&self) -> usize {
        self.symbols.len()
    }

    /// Key at `index` in the enumeration sequence
    pub fn symbol_at(&self, index: usize) -> RegistryResult<SymbolKey> {
        self.symbols
            .get(index)
            .copied()
            .ok_or(RegistryError::IndexOutOfRange {
                index,
                count: self.symbols.len(),
            })
    }

    // ============ Internals ============

    fn require_owner(&self, caller: Address) -> RegistryResult<()> {
        check!(
            caller == self.owner,
            RegistryError::Unauthorized {
                expected: self.owner,
                actual: caller,
            }
        );
        Ok(())
    }

    /// Upsert a record; appends to the enumeration sequence when the key
    /// was not live. Infallible by construction: callers validate first.
    fn write_record(&mut self, symbol: &str, price: u128, now: u64) -> SymbolKey {
        let key = symbol_to_key(symbol);
        match self.records.get_mut(&key) {
            Some(record) if record.is_live => record.set(price, now),
            Some(record) => {
                // Dead record: revive it and re-enter enumeration.
                record.set(price, now);
                self.index.insert(key, self.symbols.len());
                self.symbols.push(key);
            }
            None => {
                self.records.insert(key, PriceRecord::new(price, now));
                self.index.insert(key, self.symbols.len());
                self.symbols.push(key);
            }
        }
        key
    }
}

// ============ Tests ============
