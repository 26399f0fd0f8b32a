//! In-memory localisation catalogue.

use crate::service_registry::{domain::I18nKey, ports::Localizer};
use std::collections::BTreeMap;

/// Localizer backed by an in-memory key name to display text catalogue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogLocalizer {
    catalogue: BTreeMap<String, String>,
}

impl CatalogLocalizer {
    /// Creates an empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the display text for `key_name`.
    #[must_use]
    pub fn with_entry(mut self, key_name: impl Into<String>, text: impl Into<String>) -> Self {
        self.catalogue.insert(key_name.into(), text.into());
        self
    }

    /// Returns the number of catalogue entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.catalogue.len()
    }

    /// Returns `true` when the catalogue has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalogue.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for CatalogLocalizer
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            catalogue: iter
                .into_iter()
                .map(|(key, text)| (key.into(), text.into()))
                .collect(),
        }
    }
}

impl Localizer for CatalogLocalizer {
    fn translate(&self, key: &dyn I18nKey) -> Option<String> {
        self.catalogue.get(key.key_name()).cloned()
    }
}
