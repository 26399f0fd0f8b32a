//! Service key: the identity under which a service type is registered.

use super::{I18nKey, ServiceKeyError, ServiceName};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Immutable identifier for a registrable service.
///
/// A key carries a [`ServiceName`], which is its identity, and an optional
/// human-readable label. Equality, ordering and hashing consider the name
/// only, so two keys that differ solely in their label are the same key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RawServiceKey")]
pub struct ServiceKey {
    name: ServiceName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

/// Wire form of a key; labels pass through [`ServiceKey::with_label`].
#[derive(Deserialize)]
struct RawServiceKey {
    name: ServiceName,
    #[serde(default)]
    label: Option<String>,
}

impl From<RawServiceKey> for ServiceKey {
    fn from(raw: RawServiceKey) -> Self {
        raw.label
            .into_iter()
            .fold(Self::new(raw.name), Self::with_label)
    }
}

impl ServiceKey {
    /// Creates an unlabelled key from a validated name.
    #[must_use]
    pub const fn new(name: ServiceName) -> Self {
        Self { name, label: None }
    }

    /// Creates an unlabelled key from a raw name.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceKeyError`] when the name fails validation.
    pub fn named(name: impl Into<String>) -> Result<Self, ServiceKeyError> {
        Ok(Self::new(ServiceName::new(name)?))
    }

    /// Creates a key whose identity comes from a localisation key.
    ///
    /// The localisation key's name becomes the service name; no label is
    /// attached until [`Self::with_label`] is called.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceKeyError`] when the key name fails validation.
    pub fn from_i18n_key(key: &dyn I18nKey) -> Result<Self, ServiceKeyError> {
        Self::named(key.key_name())
    }

    /// Attaches a human-readable label. Blank labels are ignored.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let text: String = label.into();
        let trimmed = text.trim();
        self.label = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        };
        self
    }

    /// Returns the discriminating name.
    #[must_use]
    pub const fn name(&self) -> &ServiceName {
        &self.name
    }

    /// Returns the display label, falling back to the name when unlabelled.
    #[must_use]
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| self.name.as_str())
    }

    /// Returns `true` when a label was attached.
    #[must_use]
    pub const fn has_label(&self) -> bool {
        self.label.is_some()
    }
}

impl PartialEq for ServiceKey {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ServiceKey {}

impl PartialOrd for ServiceKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ServiceKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl Hash for ServiceKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.as_str().hash(state);
    }
}

impl Borrow<str> for ServiceKey {
    fn borrow(&self) -> &str {
        self.name.as_str()
    }
}

impl From<ServiceName> for ServiceKey {
    fn from(name: ServiceName) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name, f)
    }
}
