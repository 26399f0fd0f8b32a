//! Registration handle attributed to a single registrar.

use super::{ConfigurationResult, ServiceRegistry};
use crate::service_registry::domain::{I18nKey, Service, ServiceKey, ServiceType};

/// Registration handle that records which registrar made each binding.
///
/// Obtained from [`ServiceRegistry::scope`] or handed to
/// [`ServiceRegistrar::register_services`](crate::service_registry::ports::ServiceRegistrar::register_services)
/// by [`RegistryBootstrap`](super::RegistryBootstrap). Conflict errors name
/// the registrar that owns an existing binding, which makes clashes between
/// independent modules easy to trace.
#[derive(Debug)]
pub struct RegistrarScope<'a> {
    registry: &'a mut ServiceRegistry,
    registrar: &'a str,
}

impl<'a> RegistrarScope<'a> {
    pub(super) const fn new(registry: &'a mut ServiceRegistry, registrar: &'a str) -> Self {
        Self {
            registry,
            registrar,
        }
    }

    /// Returns the registrar name recorded on bindings.
    #[must_use]
    pub const fn registrar(&self) -> &str {
        self.registrar
    }

    /// Binds `key` to `service_type` on behalf of this registrar.
    ///
    /// # Errors
    ///
    /// See [`ServiceRegistry::register_service`].
    pub fn register_service(
        &mut self,
        key: ServiceKey,
        service_type: ServiceType,
    ) -> ConfigurationResult<()> {
        self.registry.bind(key, service_type, Some(self.registrar))
    }

    /// Binds `key` to the service implementation `S`.
    ///
    /// # Errors
    ///
    /// See [`ServiceRegistry::register_service`].
    pub fn register<S: Service>(&mut self, key: ServiceKey) -> ConfigurationResult<()> {
        self.register_service(key, ServiceType::of::<S>())
    }

    /// Binds a raw service name to `service_type`.
    ///
    /// # Errors
    ///
    /// See [`ServiceRegistry::register_named_service`].
    pub fn register_named_service(
        &mut self,
        name: &str,
        service_type: ServiceType,
    ) -> ConfigurationResult<()> {
        let key = ServiceKey::named(name)?;
        self.register_service(key, service_type)
    }

    /// Binds a key derived from a localisation key to `service_type`.
    ///
    /// # Errors
    ///
    /// See [`ServiceRegistry::register_labelled_service`].
    pub fn register_labelled_service(
        &mut self,
        label_key: &dyn I18nKey,
        service_type: ServiceType,
    ) -> ConfigurationResult<()> {
        let key = self.registry.key_for(label_key)?;
        self.register_service(key, service_type)
    }
}
