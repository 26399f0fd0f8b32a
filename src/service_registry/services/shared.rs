//! Thread-safe registry handle for concurrent registration.

use super::{ConfigurationResult, RegistrySnapshot, ServiceRegistry, UnknownServiceError};
use crate::service_registry::domain::{I18nKey, ServiceKey, ServiceType};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Cloneable handle to a registry shared between registering threads.
///
/// Every mutation takes the write lock. A failing registration never
/// touches the table, so a poisoned lock still guards consistent data and
/// is recovered from rather than reported.
#[derive(Debug, Clone, Default)]
pub struct SharedServiceRegistry {
    inner: Arc<RwLock<ServiceRegistry>>,
}

impl SharedServiceRegistry {
    /// Wraps `registry` for shared use.
    #[must_use]
    pub fn new(registry: ServiceRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, ServiceRegistry> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ServiceRegistry> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Binds `key` to `service_type`.
    ///
    /// # Errors
    ///
    /// See [`ServiceRegistry::register_service`].
    pub fn register_service(
        &self,
        key: ServiceKey,
        service_type: ServiceType,
    ) -> ConfigurationResult<()> {
        self.write().register_service(key, service_type)
    }

    /// Binds `key` to `service_type` on behalf of `registrar`.
    ///
    /// # Errors
    ///
    /// See [`ServiceRegistry::register_service`].
    pub fn register_service_for(
        &self,
        registrar: &str,
        key: ServiceKey,
        service_type: ServiceType,
    ) -> ConfigurationResult<()> {
        self.write().scope(registrar).register_service(key, service_type)
    }

    /// Binds a key derived from a localisation key to `service_type`.
    ///
    /// # Errors
    ///
    /// See [`ServiceRegistry::register_labelled_service`].
    pub fn register_labelled_service(
        &self,
        label_key: &dyn I18nKey,
        service_type: ServiceType,
    ) -> ConfigurationResult<()> {
        self.write().register_labelled_service(label_key, service_type)
    }

    /// Seals the shared registry.
    pub fn seal(&self) {
        self.write().seal();
    }

    /// Returns `true` once sealed.
    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.read().is_sealed()
    }

    /// Returns the service type bound to `key`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownServiceError`] when `key` was never registered.
    pub fn resolve_type(&self, key: &ServiceKey) -> Result<ServiceType, UnknownServiceError> {
        self.read().resolve_type(key)
    }

    /// Returns every `(key, type)` pair in key order.
    #[must_use]
    pub fn all_entries(&self) -> Vec<(ServiceKey, ServiceType)> {
        self.read().all_entries()
    }

    /// Captures the registry contents for introspection.
    #[must_use]
    pub fn snapshot(&self) -> RegistrySnapshot {
        self.read().snapshot()
    }

    /// Seals the registry and returns an immutable copy for lock-free reads.
    ///
    /// Further registrations through any clone of this handle are rejected.
    #[must_use]
    pub fn freeze(&self) -> Arc<ServiceRegistry> {
        let mut registry = self.write();
        registry.seal();
        Arc::new(registry.clone())
    }
}
