//! Audit notification observers
//!
//! The ledger dispatches each notification synchronously, while still
//! holding its state lock, so observers see notifications in exactly the
//! order the mutations were applied.
//!
//! ## Observer Rules
//!
//! `notify` runs inside the ledger's critical section. Observers must:
//! - Return quickly (every other caller is blocked meanwhile)
//! - Never call back into the ledger that notified them (the lock is not re-entrant)
//! - Never panic

use agenda_core::Notification;
use parking_lot::Mutex;
use tracing::info;

/// Receiver of audit notifications
pub trait LedgerObserver: Send + Sync {
    /// Called once per successful mutation
    fn notify(&self, notification: &Notification);
}

/// In-memory recorder of every notification it receives
///
/// # Example
///
/// ```
/// use agenda_ledger::{EventLedger, NotificationLog};
/// use agenda_core::CallerId;
/// use std::sync::Arc;
///
/// let log = Arc::new(NotificationLog::new());
/// let ledger = EventLedger::new();
/// ledger.subscribe(log.clone());
///
/// ledger.create(&CallerId::new(), "Standup", "Daily sync", 1672531200).unwrap();
/// assert_eq!(log.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct NotificationLog {
    entries: Mutex<Vec<Notification>>,
}

impl NotificationLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every notification received so far, oldest first
    pub fn entries(&self) -> Vec<Notification> {
        self.entries.lock().clone()
    }

    /// Most recent notification
    pub fn last(&self) -> Option<Notification> {
        self.entries.lock().last().cloned()
    }

    /// Number of notifications received
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether nothing has been received
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Drop all recorded notifications
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl LedgerObserver for NotificationLog {
    fn notify(&self, notification: &Notification) {
        self.entries.lock().push(notification.clone());
    }
}

/// Forwards every notification to `tracing` at INFO level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl LedgerObserver for TracingObserver {
    fn notify(&self, notification: &Notification) {
        match notification {
            Notification::Created { caller, id, name } => {
                info!(target: "agenda::audit", %caller, %id, name = %name, "event created")
            }
            Notification::Updated { caller, id, name } => {
                info!(target: "agenda::audit", %caller, %id, name = %name, "event updated")
            }
            Notification::Deleted { caller, id } => {
                info!(target: "agenda::audit", %caller, %id, "event deleted")
            }
        }
    }
}
