//! A single registry entry.

use super::{ServiceKey, ServiceType};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Binding of a [`ServiceKey`] to the [`ServiceType`] that implements it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceBinding {
    key: ServiceKey,
    service_type: ServiceType,
    registrar: Option<String>,
    registered_at: DateTime<Utc>,
}

impl ServiceBinding {
    /// Creates a binding stamped with the current clock time.
    #[must_use]
    pub fn new(
        key: ServiceKey,
        service_type: ServiceType,
        registrar: Option<&str>,
        clock: &(impl Clock + ?Sized),
    ) -> Self {
        Self {
            key,
            service_type,
            registrar: registrar.map(str::to_owned),
            registered_at: clock.utc(),
        }
    }

    /// Returns the bound key.
    #[must_use]
    pub const fn key(&self) -> &ServiceKey {
        &self.key
    }

    /// Returns the bound service type.
    #[must_use]
    pub const fn service_type(&self) -> ServiceType {
        self.service_type
    }

    /// Returns the name of the registrar that contributed this binding, if
    /// it was registered through a registrar scope.
    #[must_use]
    pub fn registrar(&self) -> Option<&str> {
        self.registrar.as_deref()
    }

    /// Returns when the binding was made.
    #[must_use]
    pub const fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}
