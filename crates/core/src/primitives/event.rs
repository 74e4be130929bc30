//! Record types for the event ledger
//!
//! These types define the structure of the records the ledger stores and
//! the shapes it hands back to callers.

use crate::types::{CallerId, EventId, Timestamp};
use serde::{Deserialize, Serialize};

/// The caller-editable payload of a record
///
/// This is what `get` returns: the name, description and timestamp exactly
/// as last written. Empty strings are valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventDetails {
    /// Event name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Caller-supplied timestamp (seconds since epoch, unvalidated)
    pub timestamp: Timestamp,
}

impl EventDetails {
    /// Create a new details payload
    pub fn new(name: impl Into<String>, description: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            timestamp,
        }
    }
}

/// A live record in the ledger
///
/// `id` and `owner` are fixed at creation. Only `details` changes on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Ledger-wide identifier
    pub id: EventId,
    /// Caller that created the record
    pub owner: CallerId,
    /// Editable payload
    pub details: EventDetails,
}

impl EventRecord {
    /// Create a record
    pub fn new(id: EventId, owner: CallerId, details: EventDetails) -> Self {
        Self { id, owner, details }
    }

    /// Project the record into a listing entry
    pub fn to_entry(&self) -> EventEntry {
        EventEntry {
            id: self.id,
            name: self.details.name.clone(),
            description: self.details.description.clone(),
            timestamp: self.details.timestamp,
        }
    }
}

/// One element of a caller's listing
///
/// Listing never includes the owner: every entry belongs to the caller
/// that asked for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventEntry {
    /// Ledger-wide identifier
    pub id: EventId,
    /// Event name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Caller-supplied timestamp
    pub timestamp: Timestamp,
}

impl EventEntry {
    /// The editable payload of this entry
    pub fn details(&self) -> EventDetails {
        EventDetails::new(self.name.clone(), self.description.clone(), self.timestamp)
    }
}
