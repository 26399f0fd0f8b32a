//! Validated service name type.

use super::ServiceKeyError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a service name.
const MAX_NAME_LENGTH: usize = 128;

/// Validated identifier that discriminates one service key from another.
///
/// Names are case-preserving so that keys derived from localisation
/// identifiers (e.g. `Authorisation`) keep their familiar spelling.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServiceName(String);

impl ServiceName {
    /// Creates a validated service name.
    ///
    /// The input is trimmed. Only ASCII alphanumerics and `_`, `-`, `.`, `:`
    /// are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceKeyError::EmptyName`] when the value is empty after
    /// trimming, [`ServiceKeyError::NameTooLong`] when it exceeds 128
    /// characters, or [`ServiceKeyError::InvalidName`] when it contains any
    /// other character.
    pub fn new(value: impl Into<String>) -> Result<Self, ServiceKeyError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ServiceKeyError::EmptyName);
        }

        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(ServiceKeyError::NameTooLong(raw));
        }

        let is_valid = trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ':'));

        if !is_valid {
            return Err(ServiceKeyError::InvalidName(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the service name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ServiceName {
    type Error = ServiceKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ServiceName {
    type Error = ServiceKeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ServiceName> for String {
    fn from(value: ServiceName) -> Self {
        value.0
    }
}
