//! One-shot registry construction from a set of registrars.

use super::{ConfigurationError, ConfigurationResult, ServiceRegistry};
use crate::service_registry::{adapters::linked_registrars, ports::ServiceRegistrar};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Builds a sealed registry by running every registrar exactly once.
///
/// The bootstrap owns the registry for the whole configuration phase, so a
/// half-configured registry is never observable: [`Self::build`] either
/// returns a fully populated, sealed registry or an error.
pub struct RegistryBootstrap {
    registry: ServiceRegistry,
    registrars: Vec<Box<dyn ServiceRegistrar>>,
}

impl fmt::Debug for RegistryBootstrap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBootstrap")
            .field("registry", &self.registry)
            .field("registrars", &self.registrar_names())
            .finish()
    }
}

impl Default for RegistryBootstrap {
    fn default() -> Self {
        Self::new(ServiceRegistry::new())
    }
}

impl RegistryBootstrap {
    /// Starts a bootstrap around an open registry.
    #[must_use]
    pub fn new(registry: ServiceRegistry) -> Self {
        Self {
            registry,
            registrars: Vec::new(),
        }
    }

    /// Adds a registrar. Registrars run in the order they were added.
    #[must_use]
    pub fn with_registrar(self, registrar: impl ServiceRegistrar + 'static) -> Self {
        self.with_boxed_registrar(Box::new(registrar))
    }

    /// Adds an already boxed registrar.
    #[must_use]
    pub fn with_boxed_registrar(mut self, registrar: Box<dyn ServiceRegistrar>) -> Self {
        self.registrars.push(registrar);
        self
    }

    /// Adds every registrar submitted with
    /// [`service_registrar!`](crate::service_registrar), in name order.
    #[must_use]
    pub fn with_linked_registrars(self) -> Self {
        linked_registrars()
            .into_iter()
            .fold(self, Self::with_registrar)
    }

    /// Returns the names of the registrars added so far.
    #[must_use]
    pub fn registrar_names(&self) -> Vec<&str> {
        self.registrars.iter().map(|registrar| registrar.name()).collect()
    }

    /// Runs all registrars, seals the registry and returns it for sharing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DuplicateRegistrar`] before any
    /// registrar runs when two share a name, or
    /// [`ConfigurationError::RegistrarFailed`] wrapping the first failure a
    /// registrar reports.
    pub fn build(self) -> ConfigurationResult<Arc<ServiceRegistry>> {
        let Self {
            mut registry,
            registrars,
        } = self;

        let mut seen = BTreeSet::new();
        for registrar in &registrars {
            if !seen.insert(registrar.name()) {
                return Err(ConfigurationError::DuplicateRegistrar(
                    registrar.name().to_owned(),
                ));
            }
        }

        for registrar in &registrars {
            let name = registrar.name();
            debug!(registrar = name, "running service registrar");
            registrar
                .register_services(&mut registry.scope(name))
                .map_err(|source| ConfigurationError::RegistrarFailed {
                    registrar: name.to_owned(),
                    source: Box::new(source),
                })?;
        }

        registry.seal();
        info!(
            registrars = registrars.len(),
            services = registry.len(),
            "service registry bootstrapped"
        );
        Ok(Arc::new(registry))
    }
}
