//! Convenient imports for Agenda.
//!
//! ```ignore
//! use agenda::prelude::*;
//!
//! let agenda = Agenda::new();
//! let me = agenda.session(CallerId::new());
//! me.create_event("Standup", "Daily sync", 1672531200)?;
//! ```

// Main entry point
pub use crate::agenda::{Agenda, AgendaBuilder, CallerSession};

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use crate::types::{CallerId, EventDetails, EventEntry, EventId, Notification, Timestamp};

// Configuration and observers
pub use crate::types::{LedgerObserver, NotificationLog, OwnershipPolicy};
