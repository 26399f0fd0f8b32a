//! Error types for service registry domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing service keys.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceKeyError {
    /// The service name is empty after trimming.
    #[error("service name must not be empty")]
    EmptyName,

    /// The service name contains characters outside `[A-Za-z0-9_.:-]`.
    #[error(
        "service name '{0}' contains invalid characters (only ASCII alphanumerics and '_', '-', '.', ':' allowed)"
    )]
    InvalidName(String),

    /// The service name exceeds the 128-character limit.
    #[error("service name exceeds 128 character limit: {0}")]
    NameTooLong(String),
}

/// Error returned while parsing a registry state from its canonical string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown registry state: {0}")]
pub struct ParseRegistryStateError(pub String);
