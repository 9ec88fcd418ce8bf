//! NGX Oracle Common Library
//!
//! Shared types, constants, and utilities for the NGX price oracle
//! contracts. This crate is the foundation the registry contract builds on.
//!
//! ## Modules
//!
//! - **types**: addresses, symbol keys, price records
//! - **constants**: every magic number, grouped by domain
//! - **errors**: the registry error taxonomy
//! - **events**: the append-only per-call event log
//! - **validation**: `check!` macro and precondition helpers
//! - **key**: ticker string → fixed-width key encoding
//! - **keeper**: pure update-planning logic for the off-chain keeper

pub mod constants;
pub mod errors;
pub mod events;
pub mod keeper;
pub mod key;
pub mod types;
pub mod validation;


// Re-exports for convenience
pub use constants::*;
pub use errors::*;
pub use events::*;
pub use keeper::*;
pub use key::*;
pub use types::*;
