//! Ledger snapshots
//!
//! A snapshot is the complete durable state of a ledger: the live records,
//! the id counter and the per-owner index. Snapshots are encoded with
//! MessagePack (named fields) so they survive field reordering.
//!
//! ## Restore Validation
//!
//! `EventLedger::restore` rejects any snapshot that breaks a ledger invariant:
//! - unknown format version
//! - a record id at or above `next_id`, or a duplicate record id
//! - an owner listed twice, or with an empty id sequence
//! - an owner sequence not in ascending (creation) order
//! - an indexed id with no record, or whose record has another owner
//! - a record that no owner sequence mentions

use crate::config::LedgerConfig;
use crate::ledger::{EventLedger, LedgerState};
use agenda_core::error::{Error, Result};
use agenda_core::{CallerId, EventId, EventRecord};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Current snapshot format
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// Serializable image of a ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Encoding format, see [`SNAPSHOT_FORMAT_VERSION`]
    pub format_version: u32,
    /// Id the next `create` receives
    pub next_id: EventId,
    /// Live records, ascending by id
    pub records: Vec<EventRecord>,
    /// Live ids per owner in creation order, owners ascending
    pub owner_index: Vec<(CallerId, Vec<EventId>)>,
}

impl LedgerSnapshot {
    /// Encode as MessagePack
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        rmp_serde::to_vec_named(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Decode from MessagePack
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        rmp_serde::from_slice(bytes).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Number of live records captured
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the snapshot captured no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn from_state(state: &LedgerState) -> Self {
        let mut records: Vec<EventRecord> = state.records.values().cloned().collect();
        records.sort_by_key(|record| record.id);

        let mut owner_index: Vec<(CallerId, Vec<EventId>)> = state
            .owner_index
            .iter()
            .map(|(owner, ids)| (*owner, ids.clone()))
            .collect();
        owner_index.sort_by_key(|(owner, _)| *owner);

        Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            next_id: state.next_id,
            records,
            owner_index,
        }
    }

    fn into_state(self) -> Result<LedgerState> {
        if self.format_version != SNAPSHOT_FORMAT_VERSION {
            return Err(Error::Corruption(format!(
                "unsupported format version {}",
                self.format_version
            )));
        }

        let mut records = FxHashMap::with_capacity_and_hasher(self.records.len(), Default::default());
        for record in self.records {
            if record.id >= self.next_id {
                return Err(Error::Corruption(format!(
                    "record {} not below next id {}",
                    record.id, self.next_id
                )));
            }
            let id = record.id;
            if records.insert(id, record).is_some() {
                return Err(Error::Corruption(format!("duplicate record {}", id)));
            }
        }

        let mut owner_index = FxHashMap::default();
        let mut indexed = FxHashSet::default();
        for (owner, ids) in self.owner_index {
            if ids.is_empty() {
                return Err(Error::Corruption(format!("owner {} has no records", owner)));
            }
            if !ids.windows(2).all(|pair| pair[0] < pair[1]) {
                return Err(Error::Corruption(format!(
                    "ids for owner {} out of creation order",
                    owner
                )));
            }
            for id in &ids {
                match records.get(id) {
                    Some(record) if record.owner == owner => {}
                    Some(record) => {
                        return Err(Error::Corruption(format!(
                            "record {} indexed under {} but owned by {}",
                            id, owner, record.owner
                        )))
                    }
                    None => {
                        return Err(Error::Corruption(format!(
                            "owner {} indexes missing record {}",
                            owner, id
                        )))
                    }
                }
                if !indexed.insert(*id) {
                    return Err(Error::Corruption(format!("record {} indexed twice", id)));
                }
            }
            if owner_index.insert(owner, ids).is_some() {
                return Err(Error::Corruption(format!("owner {} listed twice", owner)));
            }
        }

        if indexed.len() != records.len() {
            return Err(Error::Corruption(format!(
                "{} records but {} indexed",
                records.len(),
                indexed.len()
            )));
        }

        Ok(LedgerState {
            records,
            next_id: self.next_id,
            owner_index,
        })
    }
}

impl EventLedger {
    /// Capture the full ledger state atomically
    pub fn snapshot(&self) -> LedgerSnapshot {
        let state = self.lock_state();
        LedgerSnapshot::from_state(&state)
    }

    /// Build a ledger from a snapshot
    ///
    /// No notifications are emitted and no observers are carried over.
    ///
    /// # Errors
    ///
    /// * `Corruption` - the snapshot violates a ledger invariant
    pub fn restore(config: LedgerConfig, snapshot: LedgerSnapshot) -> Result<Self> {
        let captured = snapshot.len();
        let state = snapshot.into_state().map_err(|e| {
            warn!(error = %e, "rejected ledger snapshot");
            e
        })?;
        info!(
            records = captured,
            owners = state.owner_index.len(),
            next_id = %state.next_id,
            "restored ledger from snapshot"
        );
        Ok(Self::from_parts(config, state))
    }
}
