//! Registry Events
//!
//! Events are appended during contract execution and can be indexed
//! off-chain for monitoring and analytics. The log is append-only and
//! correlated with the host's call order; a failed call appends nothing.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::types::{Address, SymbolKey};

/// Event types for indexing and filtering
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
#[borsh(use_discriminant = true)]
#[repr(u8)]
pub enum EventType {
    PriceUpdated = 0x01,
    BatchCompleted = 0x02,
    OwnershipTransferred = 0x03,
}

/// All events the registry can emit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub enum RegistryEvent {
    /// Emitted once per successful price write (single or batch item)
    PriceUpdated {
        symbol: String,
        key: SymbolKey,
        price: u128,
        timestamp: u64,
    },

    /// Emitted once after every successful batch, summarizing it
    BatchCompleted { count: u32, timestamp: u64 },

    /// Emitted when the owner credential changes hands
    OwnershipTransferred {
        old_owner: Address,
        new_owner: Address,
    },
}

impl RegistryEvent {
    /// Get the event type for filtering
    pub fn event_type(&self) -> EventType {
        match self {
            Self::PriceUpdated { .. } => EventType::PriceUpdated,
            Self::BatchCompleted { .. } => EventType::BatchCompleted,
            Self::OwnershipTransferred { .. } => EventType::OwnershipTransferred,
        }
    }

    /// Serialize event to bytes for storage/transmission
    pub fn to_bytes(&self) -> Vec<u8> {
        borsh::to_vec(self).unwrap_or_default()
    }

    /// Deserialize event from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        borsh::from_slice(bytes).ok()
    }
}

/// Event log for collecting events during execution
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<RegistryEvent>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Emit an event (append to log)
    pub fn emit(&mut self, event: RegistryEvent) {
        self.events.push(event);
    }

    /// Get all events in emission order
    pub fn events(&self) -> &[RegistryEvent] {
        &self.events
    }

    /// Take ownership of all events
    pub fn into_events(self) -> Vec<RegistryEvent> {
        self.events
    }

    /// Filter events by type
    pub fn filter_by_type(&self, event_type: EventType) -> Vec<&RegistryEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Check if any events were emitted
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Get number of events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
