//! Registrar port: independent contributors of service bindings.

use crate::service_registry::services::{ConfigurationResult, RegistrarScope};

/// A module that contributes service bindings during start-up.
///
/// Registrars are invoked exactly once, in sequence, by
/// [`RegistryBootstrap`](crate::service_registry::services::RegistryBootstrap)
/// before the registry is sealed.
pub trait ServiceRegistrar: Send + Sync {
    /// Returns a name unique among the registrars of one bootstrap.
    fn name(&self) -> &str;

    /// Registers this registrar's services.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`](crate::service_registry::services::ConfigurationError)
    /// when a registration is rejected.
    fn register_services(&self, scope: &mut RegistrarScope<'_>) -> ConfigurationResult<()>;
}

impl<R: ServiceRegistrar + ?Sized> ServiceRegistrar for &R {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn register_services(&self, scope: &mut RegistrarScope<'_>) -> ConfigurationResult<()> {
        (**self).register_services(scope)
    }
}
