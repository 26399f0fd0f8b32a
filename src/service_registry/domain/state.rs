//! Registry configuration state.

use super::ParseRegistryStateError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-state lifecycle of a service registry.
///
/// A registry starts [`Open`](Self::Open) and moves to
/// [`Sealed`](Self::Sealed) exactly once; there is no way back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryState {
    /// Registrations are accepted.
    #[default]
    Open,
    /// Registrations are rejected; lookups are served read-only.
    Sealed,
}

impl RegistryState {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Sealed => "sealed",
        }
    }

    /// Returns `true` when registrations are accepted.
    #[must_use]
    pub const fn accepts_registrations(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for RegistryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for RegistryState {
    type Error = ParseRegistryStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "open" => Ok(Self::Open),
            "sealed" => Ok(Self::Sealed),
            _ => Err(ParseRegistryStateError(value.to_owned())),
        }
    }
}
