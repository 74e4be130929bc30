//! Event ledger for agenda
//!
//! The [`EventLedger`] owns every record, allocates ids, isolates callers
//! from each other's listings and emits one audit [`Notification`] per
//! successful mutation.
//!
//! ## Modules
//!
//! - `ledger`: the state machine and its single lock
//! - `config`: ownership policy and capacity
//! - `observer`: notification sinks
//! - `snapshot`: capture and validated restore of the full state
//!
//! [`Notification`]: agenda_core::Notification

#![warn(missing_docs)]

pub mod config;
pub mod ledger;
pub mod observer;
pub mod snapshot;

pub use config::{LedgerConfig, OwnershipPolicy};
pub use ledger::EventLedger;
pub use observer::{LedgerObserver, NotificationLog, TracingObserver};
pub use snapshot::{LedgerSnapshot, SNAPSHOT_FORMAT_VERSION};
