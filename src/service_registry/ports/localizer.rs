//! Localisation port used to label service keys.

use crate::service_registry::domain::I18nKey;

/// Looks up display strings for localisation keys.
///
/// Only ever used to produce a human-readable label; the identity of a
/// service key never depends on the translation.
pub trait Localizer: Send + Sync {
    /// Returns the display string for `key`, or `None` when the catalogue
    /// has no entry.
    fn translate(&self, key: &dyn I18nKey) -> Option<String>;
}
