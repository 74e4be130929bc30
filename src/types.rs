//! Public types for the Agenda API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Identity and ids
pub use agenda_core::CallerId;
pub use agenda_core::EventId;
pub use agenda_core::Timestamp;

// Records
pub use agenda_core::EventDetails;
pub use agenda_core::EventEntry;
pub use agenda_core::EventRecord;

// Audit notifications
pub use agenda_core::Notification;

// Configuration
pub use agenda_ledger::{LedgerConfig, OwnershipPolicy};

// Observers
pub use agenda_ledger::{LedgerObserver, NotificationLog, TracingObserver};

// Snapshots
pub use agenda_ledger::LedgerSnapshot;
