//! # Agenda
//!
//! Per-caller event ledger.
//!
//! Every caller can create, read, update, delete and list the events it
//! owns. Ids are allocated from a single ledger-wide counter and never
//! reused. Every successful mutation emits one audit [`Notification`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use agenda::prelude::*;
//!
//! let agenda = Agenda::new();
//! let alice = agenda.session(CallerId::new());
//!
//! let id = alice.create_event("Reunión de equipo", "Discusión sobre el proyecto", 1672531200)?;
//! let details = alice.get_event(id)?;
//! alice.update_event(id, "Evento nuevo", "Descripción nueva", 1672876800)?;
//! let mine = alice.list_events();
//! alice.delete_event(id)?;
//! ```
//!
//! ## Ownership
//!
//! - Any caller may read any event by id
//! - Listing only ever returns the caller's own events
//! - Update/delete follow the [`OwnershipPolicy`]: permissive by default,
//!   owner-only with [`AgendaBuilder::owner_only`]

#![warn(missing_docs)]

mod agenda;
mod error;
mod types;

pub mod prelude;

// Re-export main entry points
pub use agenda::{Agenda, AgendaBuilder, CallerSession};
pub use error::{Error, Result};

// Re-export types
pub use types::*;
