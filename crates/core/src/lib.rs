//! Core types for the agenda event ledger
//!
//! Identity and id types, record shapes, audit notifications and the
//! internal error type shared by every crate in the workspace.

#![warn(missing_docs)]

pub mod error;
pub mod primitives;
pub mod types;

pub use error::{Error, Result};
pub use primitives::{EventDetails, EventEntry, EventRecord, Notification};
pub use types::{CallerId, EventId, Timestamp};
