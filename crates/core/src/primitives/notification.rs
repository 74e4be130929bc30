//! Audit notifications emitted by ledger mutations

use crate::types::{CallerId, EventId};
use serde::{Deserialize, Serialize};

/// An audit notification
///
/// Exactly one notification accompanies every successful mutation. Failed
/// operations and reads emit nothing. `caller` is always the acting caller,
/// which under a permissive ownership policy may differ from the record owner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notification {
    /// A record was created
    Created {
        /// Acting caller (and owner of the new record)
        caller: CallerId,
        /// Newly allocated id
        id: EventId,
        /// Name of the new record
        name: String,
    },
    /// A record was updated
    Updated {
        /// Acting caller
        caller: CallerId,
        /// Updated record
        id: EventId,
        /// Name after the update
        name: String,
    },
    /// A record was deleted
    Deleted {
        /// Acting caller
        caller: CallerId,
        /// Removed record
        id: EventId,
    },
}

impl Notification {
    /// The caller that performed the mutation
    pub fn caller(&self) -> &CallerId {
        match self {
            Notification::Created { caller, .. }
            | Notification::Updated { caller, .. }
            | Notification::Deleted { caller, .. } => caller,
        }
    }

    /// The record the mutation touched
    pub fn id(&self) -> EventId {
        match self {
            Notification::Created { id, .. }
            | Notification::Updated { id, .. }
            | Notification::Deleted { id, .. } => *id,
        }
    }

    /// Short kind label, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Notification::Created { .. } => "created",
            Notification::Updated { .. } => "updated",
            Notification::Deleted { .. } => "deleted",
        }
    }
}
