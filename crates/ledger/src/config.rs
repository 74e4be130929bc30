//! Ledger configuration

use serde::{Deserialize, Serialize};

/// Who may update or delete a record
///
/// Reads are never gated: any caller may `get` any id. Listing is always
/// scoped to the caller. This policy only governs mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnershipPolicy {
    /// Any caller that knows an id may update or delete it
    #[default]
    Permissive,
    /// Only the record owner may update or delete it
    OwnerOnly,
}

impl OwnershipPolicy {
    /// Whether mutations are restricted to the owner
    pub fn enforces_owner(&self) -> bool {
        matches!(self, OwnershipPolicy::OwnerOnly)
    }
}

/// Configuration for an [`EventLedger`](crate::EventLedger)
///
/// # Example
///
/// ```
/// use agenda_ledger::{LedgerConfig, OwnershipPolicy};
///
/// let config = LedgerConfig::default()
///     .with_ownership(OwnershipPolicy::OwnerOnly)
///     .with_capacity(1024);
/// assert!(config.ownership.enforces_owner());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Mutation policy for update/delete
    pub ownership: OwnershipPolicy,
    /// Number of records to pre-allocate room for
    pub initial_capacity: usize,
}

impl LedgerConfig {
    /// Set the ownership policy
    pub fn with_ownership(mut self, ownership: OwnershipPolicy) -> Self {
        self.ownership = ownership;
        self
    }

    /// Pre-allocate room for `capacity` records
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}
