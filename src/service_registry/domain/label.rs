//! Localisation key contract.

/// A reference into an application's localisation catalogue.
///
/// Implemented by the host's label enums. The key name is stable and forms
/// the identity of any [`ServiceKey`](super::ServiceKey) derived from it;
/// the translated text is only ever used as a display label.
pub trait I18nKey: Send + Sync {
    /// Returns the stable, untranslated key name (e.g. `Authorisation`).
    fn key_name(&self) -> &str;
}
