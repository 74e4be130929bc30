//! Internal error type for the ledger crates
//!
//! Every failing ledger operation leaves the state untouched and emits no
//! notification, so none of these errors require cleanup by the caller.

use crate::types::{CallerId, EventId};
use thiserror::Error;

/// Errors raised by ledger operations
#[derive(Debug, Error)]
pub enum Error {
    /// No live record exists at the id
    #[error("event {0} does not exist")]
    NotFound(EventId),

    /// The caller does not own the record it tried to mutate
    ///
    /// Only raised when the ledger enforces owner-only mutation.
    #[error("caller {caller} may not modify event {id} owned by {owner}")]
    Unauthorized {
        /// Acting caller
        caller: CallerId,
        /// Target record
        id: EventId,
        /// Record owner
        owner: CallerId,
    },

    /// The id counter cannot advance any further
    #[error("event id space exhausted")]
    CapacityExhausted,

    /// Snapshot encoding or decoding failed
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Snapshot contents violate a ledger invariant
    #[error("corrupt snapshot: {0}")]
    Corruption(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ledger operations
pub type Result<T> = std::result::Result<T, Error>;
