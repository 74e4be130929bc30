//! Main entry point for Agenda.
//!
//! This module provides the `Agenda` struct, the shared ledger handle, and
//! `CallerSession`, a handle bound to one caller identity.

use crate::error::Result;
use crate::types::{
    CallerId, EventDetails, EventEntry, EventId, LedgerConfig, LedgerObserver, LedgerSnapshot,
    OwnershipPolicy, Timestamp, TracingObserver,
};
use agenda_ledger::EventLedger;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// The Agenda ledger.
///
/// Cheap to clone; clones share the same underlying ledger. Every operation
/// takes the acting caller explicitly. For a handle that carries the caller,
/// use [`Agenda::session`].
///
/// # Example
///
/// ```ignore
/// use agenda::prelude::*;
///
/// let agenda = Agenda::new();
/// let alice = CallerId::new();
///
/// let id = agenda.create_event(&alice, "Conferencia", "Presentación importante", 1672704000)?;
/// assert_eq!(agenda.get_event(id)?.name, "Conferencia");
/// assert_eq!(agenda.list_events(&alice).len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Agenda {
    inner: Arc<EventLedger>,
}

impl Agenda {
    /// Create an empty, permissive ledger.
    pub fn new() -> Self {
        Self::from_ledger(EventLedger::new())
    }

    /// Create a builder for ledger configuration.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let agenda = Agenda::builder()
    ///     .owner_only()
    ///     .with_tracing()
    ///     .build()?;
    /// ```
    pub fn builder() -> AgendaBuilder {
        AgendaBuilder::new()
    }

    fn from_ledger(ledger: EventLedger) -> Self {
        Self {
            inner: Arc::new(ledger),
        }
    }

    /// Bind a caller identity to this ledger.
    pub fn session(&self, caller: CallerId) -> CallerSession {
        CallerSession {
            agenda: self.clone(),
            caller,
        }
    }

    /// The underlying ledger.
    pub fn ledger(&self) -> &Arc<EventLedger> {
        &self.inner
    }

    /// The configuration in effect.
    pub fn config(&self) -> &LedgerConfig {
        self.inner.config()
    }

    /// Register an observer for all subsequent notifications.
    pub fn subscribe(&self, observer: Arc<dyn LedgerObserver>) {
        self.inner.subscribe(observer);
    }

    // =========================================================================
    // Event operations
    // =========================================================================

    /// Create an event owned by `caller` and return its id.
    pub fn create_event(
        &self,
        caller: &CallerId,
        name: impl Into<String>,
        description: impl Into<String>,
        timestamp: Timestamp,
    ) -> Result<EventId> {
        Ok(self.inner.create(caller, name, description, timestamp)?)
    }

    /// Get the name, description and timestamp of an event.
    ///
    /// Any caller may read any event.
    pub fn get_event(&self, id: EventId) -> Result<EventDetails> {
        Ok(self.inner.get(id)?)
    }

    /// Overwrite an event's name, description and timestamp.
    pub fn update_event(
        &self,
        caller: &CallerId,
        id: EventId,
        name: impl Into<String>,
        description: impl Into<String>,
        timestamp: Timestamp,
    ) -> Result<()> {
        Ok(self.inner.update(caller, id, name, description, timestamp)?)
    }

    /// Delete an event.
    pub fn delete_event(&self, caller: &CallerId, id: EventId) -> Result<()> {
        Ok(self.inner.delete(caller, id)?)
    }

    /// List the events owned by `caller`, oldest first.
    pub fn list_events(&self, caller: &CallerId) -> Vec<EventEntry> {
        self.inner.list(caller)
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    /// Capture the full ledger state.
    pub fn snapshot(&self) -> LedgerSnapshot {
        self.inner.snapshot()
    }

    /// Write a snapshot of the ledger to `path`.
    ///
    /// The file is written next to its destination and renamed into place,
    /// so a crash never leaves a half-written snapshot at `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let snapshot = self.inner.snapshot();
        let bytes = snapshot.to_bytes()?;

        let staging = staging_path(path);
        std::fs::write(&staging, &bytes)?;
        std::fs::rename(&staging, path)?;

        info!(path = %path.display(), records = snapshot.len(), bytes = bytes.len(), "saved ledger snapshot");
        Ok(())
    }
}

impl Default for Agenda {
    fn default() -> Self {
        Self::new()
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// A ledger handle acting as one caller.
///
/// # Example
///
/// ```ignore
/// let agenda = Agenda::new();
/// let owner = agenda.session(CallerId::new());
/// let user1 = agenda.session(CallerId::new());
///
/// owner.create_event("Evento del owner", "Descripción", 1673481600)?;
/// user1.create_event("Evento del usuario 1", "Otra descripción", 1673568000)?;
///
/// assert_eq!(owner.list_events().len(), 1);
/// assert_eq!(user1.list_events().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct CallerSession {
    agenda: Agenda,
    caller: CallerId,
}

impl CallerSession {
    /// The identity this session acts as.
    pub fn caller(&self) -> &CallerId {
        &self.caller
    }

    /// The shared ledger handle.
    pub fn agenda(&self) -> &Agenda {
        &self.agenda
    }

    /// Create an event owned by this caller.
    pub fn create_event(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        timestamp: Timestamp,
    ) -> Result<EventId> {
        self.agenda.create_event(&self.caller, name, description, timestamp)
    }

    /// Get any event by id.
    pub fn get_event(&self, id: EventId) -> Result<EventDetails> {
        self.agenda.get_event(id)
    }

    /// Update an event as this caller.
    pub fn update_event(
        &self,
        id: EventId,
        name: impl Into<String>,
        description: impl Into<String>,
        timestamp: Timestamp,
    ) -> Result<()> {
        self.agenda
            .update_event(&self.caller, id, name, description, timestamp)
    }

    /// Delete an event as this caller.
    pub fn delete_event(&self, id: EventId) -> Result<()> {
        self.agenda.delete_event(&self.caller, id)
    }

    /// This caller's events, oldest first.
    pub fn list_events(&self) -> Vec<EventEntry> {
        self.agenda.list_events(&self.caller)
    }
}

/// Builder for ledger configuration.
///
/// # Example
///
/// ```ignore
/// // Owner-only mutation, audit trail through tracing
/// let agenda = Agenda::builder()
///     .owner_only()
///     .with_tracing()
///     .build()?;
///
/// // Resume from a saved snapshot
/// let agenda = Agenda::builder()
///     .restore_from("./agenda.snapshot")
///     .build()?;
/// ```
#[derive(Default)]
pub struct AgendaBuilder {
    config: LedgerConfig,
    observers: Vec<Arc<dyn LedgerObserver>>,
    restore_from: Option<PathBuf>,
}

impl AgendaBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole ledger configuration.
    pub fn config(mut self, config: LedgerConfig) -> Self {
        self.config = config;
        self
    }

    /// Let any caller update or delete any event (default).
    pub fn permissive(mut self) -> Self {
        self.config.ownership = OwnershipPolicy::Permissive;
        self
    }

    /// Only let owners update or delete their events.
    pub fn owner_only(mut self) -> Self {
        self.config.ownership = OwnershipPolicy::OwnerOnly;
        self
    }

    /// Pre-allocate room for `capacity` events.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Register an observer before any operation runs.
    pub fn observer(mut self, observer: Arc<dyn LedgerObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Log every notification through `tracing`.
    pub fn with_tracing(self) -> Self {
        self.observer(Arc::new(TracingObserver))
    }

    /// Start from the snapshot stored at `path` instead of an empty ledger.
    pub fn restore_from(mut self, path: impl AsRef<Path>) -> Self {
        self.restore_from = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build the ledger.
    ///
    /// Fails only when restoring: the file cannot be read, cannot be
    /// decoded, or describes an inconsistent ledger.
    pub fn build(self) -> Result<Agenda> {
        let ledger = match &self.restore_from {
            Some(path) => {
                let bytes = std::fs::read(path)?;
                let snapshot = LedgerSnapshot::from_bytes(&bytes)?;
                EventLedger::restore(self.config, snapshot)?
            }
            None => EventLedger::with_config(self.config),
        };

        for observer in self.observers {
            ledger.subscribe(observer);
        }
        Ok(Agenda::from_ledger(ledger))
    }
}

impl std::fmt::Debug for AgendaBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgendaBuilder")
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .field("restore_from", &self.restore_from)
            .finish()
    }
}
