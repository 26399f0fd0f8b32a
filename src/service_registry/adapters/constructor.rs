//! Object factory backed by a table of per-type constructors.

use crate::service_registry::{
    domain::{Service, ServiceType},
    ports::{FactoryError, FactoryResult, ServiceFactory, ServiceInstance},
};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

type Constructor = Arc<dyn Fn() -> FactoryResult<ServiceInstance> + Send + Sync>;

/// [`ServiceFactory`] that builds instances from registered constructors.
///
/// Hosts walk a sealed registry and make sure every bound type has a
/// constructor here, or plug their own container in behind the
/// [`ServiceFactory`] port instead.
#[derive(Clone, Default)]
pub struct ConstructorFactory {
    constructors: HashMap<ServiceType, Constructor>,
}

impl fmt::Debug for ConstructorFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<_> = self
            .constructors
            .keys()
            .map(ServiceType::type_name)
            .collect();
        types.sort_unstable();
        f.debug_struct("ConstructorFactory")
            .field("types", &types)
            .finish()
    }
}

impl ConstructorFactory {
    /// Creates a factory with no constructors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds `S` with its [`Default`] implementation.
    #[must_use]
    pub fn with_default<S: Service + Default>(self) -> Self {
        self.with_constructor(|| Ok(S::default()))
    }

    /// Builds `S` with a fallible constructor.
    #[must_use]
    pub fn with_constructor<S, F>(mut self, constructor: F) -> Self
    where
        S: Service,
        F: Fn() -> FactoryResult<S> + Send + Sync + 'static,
    {
        self.constructors.insert(
            ServiceType::of::<S>(),
            Arc::new(move || constructor().map(ServiceInstance::new)),
        );
        self
    }

    /// Hands out the same shared instance of `S` on every request.
    #[must_use]
    pub fn with_shared<S: Service>(mut self, instance: Arc<S>) -> Self {
        self.constructors.insert(
            ServiceType::of::<S>(),
            Arc::new(move || Ok(ServiceInstance::from_arc(Arc::clone(&instance)))),
        );
        self
    }

    /// Returns `true` when `service_type` has a constructor.
    #[must_use]
    pub fn supports(&self, service_type: ServiceType) -> bool {
        self.constructors.contains_key(&service_type)
    }
}

impl ServiceFactory for ConstructorFactory {
    fn create(&self, service_type: ServiceType) -> FactoryResult<ServiceInstance> {
        let constructor = self
            .constructors
            .get(&service_type)
            .ok_or(FactoryError::UnsupportedType(service_type))?;
        constructor()
    }
}
