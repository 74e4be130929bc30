//! EventLedger: per-caller event records with audit notifications
//!
//! ## Design: ONE LOCK
//!
//! All ledger state (`records`, `next_id`, `owner_index`) lives in a single
//! [`LedgerState`] behind one `parking_lot::Mutex`. The owner index must
//! never be observed out of step with the record map, so there is no
//! sharding and no lock-free read path.
//!
//! ## Id Allocation
//!
//! Ids come from one ledger-wide counter starting at 0. The counter only
//! moves forward, on successful `create`, and deleted ids are never handed
//! out again.
//!
//! ## Ownership
//!
//! - `get` is ungated: any caller may read any id
//! - `list` is always scoped to the caller
//! - `update`/`delete` follow the configured [`OwnershipPolicy`]
//!
//! ## Notifications
//!
//! Each successful mutation dispatches exactly one [`Notification`] to every
//! subscribed [`LedgerObserver`] before the state lock is released.

use crate::config::{LedgerConfig, OwnershipPolicy};
use crate::observer::LedgerObserver;
use agenda_core::error::{Error, Result};
use agenda_core::{CallerId, EventDetails, EventEntry, EventId, EventRecord, Notification, Timestamp};
use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// The state guarded by the ledger lock
#[derive(Debug, Default)]
pub(crate) struct LedgerState {
    /// Live records by id
    pub(crate) records: FxHashMap<EventId, EventRecord>,
    /// Id the next `create` receives
    pub(crate) next_id: EventId,
    /// Live ids per owner, in creation order. Owners with no live ids are absent.
    pub(crate) owner_index: FxHashMap<CallerId, Vec<EventId>>,
}

impl LedgerState {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            records: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            next_id: EventId::ZERO,
            owner_index: FxHashMap::default(),
        }
    }

    fn record(&self, id: EventId) -> Result<&EventRecord> {
        self.records.get(&id).ok_or(Error::NotFound(id))
    }

    fn unindex(&mut self, owner: &CallerId, id: EventId) {
        if let Some(ids) = self.owner_index.get_mut(owner) {
            if let Some(pos) = ids.iter().position(|candidate| *candidate == id) {
                ids.remove(pos);
            }
            if ids.is_empty() {
                self.owner_index.remove(owner);
            }
        }
    }
}

/// Per-caller event ledger
///
/// `EventLedger` is `Send + Sync`; share it with `Arc`.
///
/// # Example
///
/// ```
/// use agenda_ledger::EventLedger;
/// use agenda_core::{CallerId, EventId};
///
/// let ledger = EventLedger::new();
/// let alice = CallerId::new();
///
/// let id = ledger.create(&alice, "Reunión de equipo", "Discusión sobre el proyecto", 1672531200).unwrap();
/// assert_eq!(id, EventId::ZERO);
///
/// let details = ledger.get(id).unwrap();
/// assert_eq!(details.name, "Reunión de equipo");
/// ```
pub struct EventLedger {
    config: LedgerConfig,
    state: Mutex<LedgerState>,
    observers: RwLock<Vec<Arc<dyn LedgerObserver>>>,
}

impl EventLedger {
    /// Create an empty ledger with default configuration
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    /// Create an empty ledger with the given configuration
    pub fn with_config(config: LedgerConfig) -> Self {
        let state = LedgerState::with_capacity(config.initial_capacity);
        Self::from_parts(config, state)
    }

    pub(crate) fn from_parts(config: LedgerConfig, state: LedgerState) -> Self {
        Self {
            config,
            state: Mutex::new(state),
            observers: RwLock::new(Vec::new()),
        }
    }

    /// The configuration this ledger was built with
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Register an observer for all subsequent notifications
    pub fn subscribe(&self, observer: Arc<dyn LedgerObserver>) {
        self.observers.write().push(observer);
    }

    /// Number of registered observers
    pub fn observer_count(&self) -> usize {
        self.observers.read().len()
    }

    pub(crate) fn lock_state(&self) -> parking_lot::MutexGuard<'_, LedgerState> {
        self.state.lock()
    }

    /// Dispatch to every observer. Caller must hold the state lock.
    fn emit(&self, notification: Notification) {
        for observer in self.observers.read().iter() {
            observer.notify(&notification);
        }
    }

    fn authorize(&self, caller: &CallerId, record: &EventRecord) -> Result<()> {
        match self.config.ownership {
            OwnershipPolicy::Permissive => Ok(()),
            OwnershipPolicy::OwnerOnly if record.owner == *caller => Ok(()),
            OwnershipPolicy::OwnerOnly => {
                warn!(%caller, id = %record.id, owner = %record.owner, "rejected mutation by non-owner");
                Err(Error::Unauthorized {
                    caller: *caller,
                    id: record.id,
                    owner: record.owner,
                })
            }
        }
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Create a record owned by `caller`
    ///
    /// Allocates the next ledger-wide id, indexes it under `caller` and
    /// emits [`Notification::Created`]. Name, description and timestamp are
    /// stored as given.
    ///
    /// # Errors
    ///
    /// * `CapacityExhausted` - the id counter is at `u64::MAX`
    pub fn create(
        &self,
        caller: &CallerId,
        name: impl Into<String>,
        description: impl Into<String>,
        timestamp: Timestamp,
    ) -> Result<EventId> {
        let details = EventDetails::new(name, description, timestamp);
        let mut state = self.state.lock();

        let id = state.next_id;
        let next = id.checked_next().ok_or(Error::CapacityExhausted)?;

        let name = details.name.clone();
        state.records.insert(id, EventRecord::new(id, *caller, details));
        state.owner_index.entry(*caller).or_default().push(id);
        state.next_id = next;

        debug!(%caller, %id, "event created");
        self.emit(Notification::Created {
            caller: *caller,
            id,
            name,
        });
        Ok(id)
    }

    /// Overwrite the name, description and timestamp of a live record
    ///
    /// The id and owner never change. Emits [`Notification::Updated`]
    /// carrying the new name.
    ///
    /// # Errors
    ///
    /// * `NotFound` - no live record at `id`
    /// * `Unauthorized` - owner-only policy and `caller` is not the owner
    pub fn update(
        &self,
        caller: &CallerId,
        id: EventId,
        name: impl Into<String>,
        description: impl Into<String>,
        timestamp: Timestamp,
    ) -> Result<()> {
        let details = EventDetails::new(name, description, timestamp);
        let mut state = self.state.lock();

        self.authorize(caller, state.record(id)?)?;

        let name = details.name.clone();
        if let Some(record) = state.records.get_mut(&id) {
            record.details = details;
        }

        debug!(%caller, %id, "event updated");
        self.emit(Notification::Updated {
            caller: *caller,
            id,
            name,
        });
        Ok(())
    }

    /// Remove a live record
    ///
    /// The id is dropped from its stored owner's index (not the caller's)
    /// and is never allocated again. Emits [`Notification::Deleted`].
    ///
    /// # Errors
    ///
    /// * `NotFound` - no live record at `id`, including already deleted ids
    /// * `Unauthorized` - owner-only policy and `caller` is not the owner
    pub fn delete(&self, caller: &CallerId, id: EventId) -> Result<()> {
        let mut state = self.state.lock();

        self.authorize(caller, state.record(id)?)?;

        if let Some(record) = state.records.remove(&id) {
            state.unindex(&record.owner, id);
        }

        debug!(%caller, %id, "event deleted");
        self.emit(Notification::Deleted { caller: *caller, id });
        Ok(())
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Details of a live record, regardless of who owns it
    ///
    /// # Errors
    ///
    /// * `NotFound` - no live record at `id`
    pub fn get(&self, id: EventId) -> Result<EventDetails> {
        let state = self.state.lock();
        Ok(state.record(id)?.details.clone())
    }

    /// Full record, including owner
    pub fn record(&self, id: EventId) -> Result<EventRecord> {
        let state = self.state.lock();
        state.record(id).cloned()
    }

    /// All live records owned by `caller`, in creation order
    pub fn list(&self, caller: &CallerId) -> Vec<EventEntry> {
        let state = self.state.lock();
        match state.owner_index.get(caller) {
            Some(ids) => ids
                .iter()
                .filter_map(|id| state.records.get(id))
                .map(EventRecord::to_entry)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Whether a live record exists at `id`
    pub fn exists(&self, id: EventId) -> bool {
        self.state.lock().records.contains_key(&id)
    }

    /// Owner of the live record at `id`
    pub fn owner_of(&self, id: EventId) -> Option<CallerId> {
        self.state.lock().records.get(&id).map(|record| record.owner)
    }

    /// Number of live records owned by `caller`
    pub fn count_for(&self, caller: &CallerId) -> usize {
        self.state
            .lock()
            .owner_index
            .get(caller)
            .map_or(0, Vec::len)
    }

    /// Number of live records across all callers
    pub fn len(&self) -> usize {
        self.state.lock().records.len()
    }

    /// Whether the ledger holds no live records
    pub fn is_empty(&self) -> bool {
        self.state.lock().records.is_empty()
    }

    /// The id the next `create` will receive
    pub fn next_id(&self) -> EventId {
        self.state.lock().next_id
    }
}

impl Default for EventLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("EventLedger")
            .field("config", &self.config)
            .field("live", &state.records.len())
            .field("next_id", &state.next_id)
            .field("owners", &state.owner_index.len())
            .field("observers", &self.observers.read().len())
            .finish()
    }
}
