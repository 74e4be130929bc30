//! Core identity types for the agenda ledger
//!
//! This module defines the fundamental types used throughout the system:
//! - [`CallerId`]: Identity of the caller acting on the ledger
//! - [`EventId`]: Globally unique, never reused record identifier
//! - [`Timestamp`]: Caller-supplied seconds since the Unix epoch

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a caller acting on the ledger
///
/// CallerId is the only notion of authority in the system. It is used in:
/// - Record ownership (stamped at creation, immutable afterwards)
/// - Listing scope (a caller only ever lists its own records)
/// - Audit notifications (the acting caller of every mutation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CallerId(Uuid);

impl CallerId {
    /// Create a new random CallerId using UUID v4
    ///
    /// # Examples
    ///
    /// ```
    /// use agenda_core::types::CallerId;
    ///
    /// let alice = CallerId::new();
    /// let bob = CallerId::new();
    /// assert_ne!(alice, bob);
    /// ```
    pub fn new() -> Self {
        CallerId(Uuid::new_v4())
    }

    /// Create CallerId from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        CallerId(uuid)
    }

    /// Create CallerId from raw bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use agenda_core::types::CallerId;
    ///
    /// let id = CallerId::from_bytes([7u8; 16]);
    /// assert_eq!(id.as_bytes(), &[7u8; 16]);
    /// ```
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        CallerId(Uuid::from_bytes(bytes))
    }

    /// Get raw bytes representation
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CallerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CallerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an event record
///
/// Ids are allocated from a single ledger-wide counter starting at 0.
/// They are shared across all callers and never reused after deletion.
/// The default is [`EventId::ZERO`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EventId(u64);

impl EventId {
    /// The first id a fresh ledger allocates
    pub const ZERO: EventId = EventId(0);

    /// Wrap a raw id
    pub const fn new(raw: u64) -> Self {
        EventId(raw)
    }

    /// Get the raw id
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// The id allocated right after this one, if the id space is not exhausted
    pub fn checked_next(&self) -> Option<EventId> {
        self.0.checked_add(1).map(EventId)
    }
}

impl From<u64> for EventId {
    fn from(raw: u64) -> Self {
        EventId(raw)
    }
}

impl From<EventId> for u64 {
    fn from(id: EventId) -> Self {
        id.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Seconds since the Unix epoch, as supplied by the caller
///
/// The ledger never validates timestamps: negative values, values in the
/// past and values far in the future are all stored verbatim.
pub type Timestamp = i64;
