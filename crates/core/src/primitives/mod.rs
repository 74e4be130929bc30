//! Primitive types for agenda
//!
//! This module defines the canonical data structures shared between the
//! `ledger` crate and the public facade.
//!
//! - **agenda-core** defines canonical semantic types (this module)
//! - **agenda-ledger** owns the state machine and its invariants

pub mod event;
pub mod notification;

// Re-export all types at module level
pub use event::{EventDetails, EventEntry, EventRecord};
pub use notification::Notification;
