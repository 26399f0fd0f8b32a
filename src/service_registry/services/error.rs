//! Error types for registration and resolution.

use crate::service_registry::{
    domain::{ServiceKey, ServiceKeyError, ServiceType},
    ports::FactoryError,
};
use thiserror::Error;

/// Result type for registry configuration operations.
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;

/// Configuration mistakes detected while populating a registry.
///
/// These are never recoverable at runtime: callers should propagate them and
/// abort start-up.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Registration was attempted after the registry was sealed.
    #[error("service registry is sealed; cannot register '{key}'")]
    RegistrySealed {
        /// Key of the rejected registration.
        key: ServiceKey,
    },

    /// The key is already bound to a different service type.
    #[error(transparent)]
    ConflictingBinding(Box<BindingConflict>),

    /// The identical binding was registered twice under a strict policy.
    #[error("service key '{key}' is already registered to {service_type}")]
    DuplicateRegistration {
        /// Repeated key.
        key: ServiceKey,
        /// Repeated service type.
        service_type: ServiceType,
    },

    /// A raw key failed validation.
    #[error(transparent)]
    InvalidKey(#[from] ServiceKeyError),

    /// Two registrars with the same name were added to one bootstrap.
    #[error("registrar '{0}' was added more than once")]
    DuplicateRegistrar(String),

    /// A registrar reported a failure while registering its services.
    #[error("registrar '{registrar}' failed: {source}")]
    RegistrarFailed {
        /// Name of the failing registrar.
        registrar: String,
        /// Underlying failure.
        source: Box<Self>,
    },

    /// Registry configuration could not be parsed.
    #[error("invalid registry configuration: {0}")]
    InvalidConfig(String),
}

impl ConfigurationError {
    /// Builds a [`ConfigurationError::ConflictingBinding`] error.
    #[must_use]
    pub fn conflicting_binding(conflict: BindingConflict) -> Self {
        Self::ConflictingBinding(Box::new(conflict))
    }
}

/// Details of an attempt to rebind a key to another service type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error(
    "service key '{key}' is already bound to {existing}{}; refusing to rebind it to {requested}",
    owner_suffix(.owner.as_deref())
)]
pub struct BindingConflict {
    /// Contested key.
    pub key: ServiceKey,
    /// Type currently bound to the key.
    pub existing: ServiceType,
    /// Type the caller attempted to bind.
    pub requested: ServiceType,
    /// Registrar that owns the existing binding, when known.
    pub owner: Option<String>,
}

fn owner_suffix(owner: Option<&str>) -> String {
    owner.map_or_else(String::new, |name| format!(" by registrar '{name}'"))
}

/// Error returned when resolving a key that was never registered.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("no service registered for key '{key}'")]
pub struct UnknownServiceError {
    /// Key that was looked up.
    pub key: ServiceKey,
}

impl UnknownServiceError {
    /// Creates an error for `key`.
    #[must_use]
    pub const fn new(key: ServiceKey) -> Self {
        Self { key }
    }
}

/// Errors returned while resolving a key to a live instance.
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    /// The key has no binding.
    #[error(transparent)]
    Unknown(#[from] UnknownServiceError),

    /// The object factory failed to produce the instance.
    #[error(transparent)]
    Factory(#[from] FactoryError),
}
