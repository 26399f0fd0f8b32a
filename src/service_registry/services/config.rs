//! Registry configuration.

use super::{ConfigurationError, ConfigurationResult};
use serde::{Deserialize, Serialize};

/// How a registry treats a second registration of an identical binding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Re-registering the same key with the same type is a no-op.
    #[default]
    Idempotent,
    /// Any second registration of a key is a configuration error.
    Reject,
}

/// Behavioural settings for a [`ServiceRegistry`](super::ServiceRegistry).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Treatment of identical repeated registrations.
    pub duplicate_policy: DuplicatePolicy,
}

impl RegistryConfig {
    /// Creates a strict configuration that rejects every repeated key.
    ///
    /// Useful when registrars are expected to be disjoint and any overlap
    /// indicates a wiring mistake.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Reject,
        }
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidConfig`] when the document is
    /// malformed or names an unknown field or policy.
    pub fn from_json(json: &str) -> ConfigurationResult<Self> {
        serde_json::from_str(json).map_err(|err| ConfigurationError::InvalidConfig(err.to_string()))
    }
}
