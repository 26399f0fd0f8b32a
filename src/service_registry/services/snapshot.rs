//! Serialisable view of registry contents for debugging and diagnostics.

use crate::service_registry::domain::{RegistryState, ServiceBinding};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time copy of a registry's bindings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Registry state when the snapshot was taken.
    pub state: RegistryState,
    /// Bindings in key order.
    pub entries: Vec<SnapshotEntry>,
}

/// One binding as it appears in a [`RegistrySnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    /// Service name.
    pub key: String,
    /// Display label (the name when unlabelled).
    pub label: String,
    /// Fully qualified implementation type name.
    pub service_type: String,
    /// Registrar that contributed the binding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registrar: Option<String>,
    /// When the binding was made.
    pub registered_at: DateTime<Utc>,
}

impl RegistrySnapshot {
    pub(super) fn new<'a>(
        state: RegistryState,
        bindings: impl IntoIterator<Item = &'a ServiceBinding>,
    ) -> Self {
        Self {
            state,
            entries: bindings.into_iter().map(SnapshotEntry::from).collect(),
        }
    }

    /// Returns the entry for `key`, if present.
    #[must_use]
    pub fn entry(&self, key: &str) -> Option<&SnapshotEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Renders the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when serialisation fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&ServiceBinding> for SnapshotEntry {
    fn from(binding: &ServiceBinding) -> Self {
        Self {
            key: binding.key().name().as_str().to_owned(),
            label: binding.key().label().to_owned(),
            service_type: binding.service_type().type_name().to_owned(),
            registrar: binding.registrar().map(str::to_owned),
            registered_at: binding.registered_at(),
        }
    }
}
