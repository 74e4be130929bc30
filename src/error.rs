//! Unified error type for Agenda.
//!
//! This module provides a clean error type that wraps the internal ledger
//! errors and presents a consistent interface to users.

use crate::types::{CallerId, EventId};
use thiserror::Error;

/// All Agenda errors.
#[derive(Debug, Error)]
pub enum Error {
    /// No live event exists at the id
    #[error("event {0} does not exist")]
    NotFound(EventId),

    /// Caller tried to modify an event it does not own
    #[error("caller {caller} is not the owner of event {id}")]
    Unauthorized {
        /// Acting caller
        caller: CallerId,
        /// Target event
        id: EventId,
        /// Event owner
        owner: CallerId,
    },

    /// No more ids can be allocated
    #[error("event id space exhausted")]
    CapacityExhausted,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Snapshot failed validation
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type for Agenda operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this is an ownership rejection.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized { .. })
    }

    /// The event id the error refers to, if any.
    pub fn event_id(&self) -> Option<EventId> {
        match self {
            Error::NotFound(id) | Error::Unauthorized { id, .. } => Some(*id),
            _ => None,
        }
    }
}

// Convert from internal ledger errors
impl From<agenda_core::Error> for Error {
    fn from(e: agenda_core::Error) -> Self {
        use agenda_core::Error as CoreError;
        match e {
            CoreError::NotFound(id) => Error::NotFound(id),
            CoreError::Unauthorized { caller, id, owner } => Error::Unauthorized { caller, id, owner },
            CoreError::CapacityExhausted => Error::CapacityExhausted,
            CoreError::Serialization(msg) => Error::Serialization(msg),
            CoreError::Corruption(msg) => Error::Storage(format!("corruption: {}", msg)),
            CoreError::Io(io_err) => Error::Io(io_err),
        }
    }
}
