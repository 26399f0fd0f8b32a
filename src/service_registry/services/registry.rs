//! The keyed service registry and its Open/Sealed state machine.

use super::{
    BindingConflict, ConfigurationError, ConfigurationResult, DuplicatePolicy, RegistrarScope, RegistryConfig,
    RegistrySnapshot, ResolveError, UnknownServiceError,
};
use crate::service_registry::{
    domain::{I18nKey, RegistryState, Service, ServiceBinding, ServiceKey, ServiceType},
    ports::{FactoryError, Localizer, ServiceFactory, ServiceInstance},
};
use mockable::{Clock, DefaultClock};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Process-wide mapping from [`ServiceKey`] to [`ServiceType`].
///
/// A registry is populated while [`Open`](RegistryState::Open) and becomes
/// read-only once [`sealed`](Self::seal). Each key maps to exactly one
/// service type and is never silently rebound. Failed registrations leave
/// the registry untouched.
///
/// Once sealed, wrap the registry in an [`Arc`] to share it between threads;
/// no locking is needed for lookups.
#[derive(Clone)]
pub struct ServiceRegistry {
    config: RegistryConfig,
    state: RegistryState,
    bindings: BTreeMap<ServiceKey, ServiceBinding>,
    localizer: Option<Arc<dyn Localizer>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("keys", &self.bindings.keys().collect::<Vec<_>>())
            .field("has_localizer", &self.localizer.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceRegistry {
    /// Creates an empty, open registry with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: RegistryConfig::default(),
            state: RegistryState::Open,
            bindings: BTreeMap::new(),
            localizer: None,
            clock: Arc::new(DefaultClock),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub const fn with_config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the localizer used to label keys derived from localisation keys.
    #[must_use]
    pub fn with_localizer(mut self, localizer: Arc<dyn Localizer>) -> Self {
        self.localizer = Some(localizer);
        self
    }

    /// Sets the clock used to timestamp bindings.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        self.clock = clock;
        self
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> RegistryState {
        self.state
    }

    /// Returns `true` once [`Self::seal`] has been called.
    #[must_use]
    pub const fn is_sealed(&self) -> bool {
        matches!(self.state, RegistryState::Sealed)
    }

    /// Returns the number of registered keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` when nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Returns `true` when `key` is bound.
    #[must_use]
    pub fn contains(&self, key: &ServiceKey) -> bool {
        self.bindings.contains_key(key)
    }

    /// Binds `key` to `service_type`.
    ///
    /// Registering the identical pair again is a no-op under
    /// [`DuplicatePolicy::Idempotent`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::RegistrySealed`] once sealed,
    /// [`ConfigurationError::ConflictingBinding`] when `key` is bound to a
    /// different type, or [`ConfigurationError::DuplicateRegistration`] for a
    /// repeated pair under [`DuplicatePolicy::Reject`].
    pub fn register_service(
        &mut self,
        key: ServiceKey,
        service_type: ServiceType,
    ) -> ConfigurationResult<()> {
        self.bind(key, service_type, None)
    }

    /// Binds `key` to the service implementation `S`.
    ///
    /// # Errors
    ///
    /// See [`Self::register_service`].
    pub fn register<S: Service>(&mut self, key: ServiceKey) -> ConfigurationResult<()> {
        self.register_service(key, ServiceType::of::<S>())
    }

    /// Binds a raw service name to `service_type`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidKey`] when `name` fails
    /// validation, otherwise see [`Self::register_service`].
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
    /// Returns [`ConfigurationError::InvalidKey`] when the key name fails
    /// validation, otherwise see [`Self::register_service`].
    pub fn register_labelled_service(
        &mut self,
        label_key: &dyn I18nKey,
        service_type: ServiceType,
    ) -> ConfigurationResult<()> {
        let key = self.key_for(label_key)?;
        self.register_service(key, service_type)
    }

    /// Derives a service key from a localisation key, labelled through the
    /// configured localizer when one is present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidKey`] when the key name fails
    /// validation.
    pub fn key_for(&self, label_key: &dyn I18nKey) -> ConfigurationResult<ServiceKey> {
        let mut key = ServiceKey::from_i18n_key(label_key)?;
        let translated = self
            .localizer
            .as_deref()
            .and_then(|localizer| localizer.translate(label_key));
        if let Some(label) = translated {
            key = key.with_label(label);
        }
        Ok(key)
    }

    /// Returns a handle that records `registrar` as the owner of each
    /// binding made through it.
    pub const fn scope<'a>(&'a mut self, registrar: &'a str) -> RegistrarScope<'a> {
        RegistrarScope::new(self, registrar)
    }

    /// Moves the registry to [`RegistryState::Sealed`]. Sealing twice is a
    /// no-op.
    pub fn seal(&mut self) {
        if self.is_sealed() {
            debug!("service registry already sealed");
            return;
        }
        self.state = RegistryState::Sealed;
        info!(entries = self.bindings.len(), "service registry sealed");
    }

    /// Returns the service type bound to `key`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownServiceError`] when `key` was never registered.
    pub fn resolve_type(&self, key: &ServiceKey) -> Result<ServiceType, UnknownServiceError> {
        self.resolve_binding(key).map(ServiceBinding::service_type)
    }

    /// Returns the full binding for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownServiceError`] when `key` was never registered.
    pub fn resolve_binding(&self, key: &ServiceKey) -> Result<&ServiceBinding, UnknownServiceError> {
        self.bindings
            .get(key)
            .ok_or_else(|| UnknownServiceError::new(key.clone()))
    }

    /// Looks a binding up by its service name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&ServiceBinding> {
        self.bindings.get(name.trim())
    }

    /// Iterates over every binding in key order.
    pub fn bindings(&self) -> impl Iterator<Item = &ServiceBinding> {
        self.bindings.values()
    }

    /// Returns every `(key, type)` pair in key order.
    ///
    /// The result is a snapshot; later registrations do not affect it.
    #[must_use]
    pub fn all_entries(&self) -> Vec<(ServiceKey, ServiceType)> {
        self.bindings
            .values()
            .map(|binding| (binding.key().clone(), binding.service_type()))
            .collect()
    }

    /// Resolves `key` and asks `factory` for an instance of its type.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Unknown`] when `key` is unbound, or
    /// [`ResolveError::Factory`] when the factory fails or produces an
    /// instance of another type.
    pub fn instantiate(
        &self,
        key: &ServiceKey,
        factory: &dyn ServiceFactory,
    ) -> Result<ServiceInstance, ResolveError> {
        let requested = self.resolve_type(key)?;
        let instance = factory.create(requested)?;
        if instance.service_type() != requested {
            return Err(FactoryError::TypeMismatch {
                requested,
                produced: instance.service_type(),
            }
            .into());
        }
        Ok(instance)
    }

    /// Captures the registry contents for introspection.
    #[must_use]
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot::new(self.state, self.bindings.values())
    }

    pub(super) fn bind(
        &mut self,
        key: ServiceKey,
        service_type: ServiceType,
        registrar: Option<&str>,
    ) -> ConfigurationResult<()> {
        if !self.state.accepts_registrations() {
            warn!(%key, %service_type, "registration rejected: registry is sealed");
            return Err(ConfigurationError::RegistrySealed { key });
        }

        if let Some(existing) = self.bindings.get(&key) {
            if existing.service_type() != service_type {
                warn!(
                    %key,
                    existing = %existing.service_type(),
                    requested = %service_type,
                    "registration rejected: key already bound to another type"
                );
                return Err(ConfigurationError::conflicting_binding(BindingConflict {
                    existing: existing.service_type(),
                    owner: existing.registrar().map(str::to_owned),
                    key,
                    requested: service_type,
                }));
            }

            return match self.config.duplicate_policy {
                DuplicatePolicy::Idempotent => {
                    debug!(%key, %service_type, "identical binding already present");
                    Ok(())
                }
                DuplicatePolicy::Reject => {
                    warn!(%key, %service_type, "registration rejected: duplicate key");
                    Err(ConfigurationError::DuplicateRegistration { key, service_type })
                }
            };
        }

        debug!(
            %key,
            %service_type,
            registrar = registrar.unwrap_or("-"),
            "service bound"
        );
        let binding = ServiceBinding::new(key.clone(), service_type, registrar, &*self.clock);
        self.bindings.insert(key, binding);
        Ok(())
    }
}
