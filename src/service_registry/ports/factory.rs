//! Object factory port for turning service types into instances.

use crate::service_registry::domain::{Service, ServiceType};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for object factory operations.
pub type FactoryResult<T> = Result<T, FactoryError>;

/// Produces live service instances from service type descriptors.
///
/// This is the seam to whatever injection or construction mechanism the
/// host application uses. The registry resolves types and hands them here;
/// it never constructs services itself.
pub trait ServiceFactory: Send + Sync {
    /// Creates an instance of `service_type`.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::UnsupportedType`] when the factory cannot
    /// produce the type, or [`FactoryError::Construction`] when
    /// construction fails.
    fn create(&self, service_type: ServiceType) -> FactoryResult<ServiceInstance>;
}

/// Type-erased handle to a live service instance.
#[derive(Clone)]
pub struct ServiceInstance {
    service_type: ServiceType,
    inner: Arc<dyn Any + Send + Sync>,
}

impl ServiceInstance {
    /// Wraps a service value.
    #[must_use]
    pub fn new<S: Service>(service: S) -> Self {
        Self::from_arc(Arc::new(service))
    }

    /// Wraps an already shared service value.
    #[must_use]
    pub fn from_arc<S: Service>(service: Arc<S>) -> Self {
        Self {
            service_type: ServiceType::of::<S>(),
            inner: service,
        }
    }

    /// Returns the concrete type of the wrapped instance.
    #[must_use]
    pub const fn service_type(&self) -> ServiceType {
        self.service_type
    }

    /// Returns the instance as `S`, or `None` when it is another type.
    #[must_use]
    pub fn downcast<S: Service>(&self) -> Option<Arc<S>> {
        Arc::clone(&self.inner).downcast::<S>().ok()
    }
}

impl fmt::Debug for ServiceInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceInstance")
            .field("service_type", &self.service_type)
            .finish_non_exhaustive()
    }
}

/// Errors returned by object factory implementations.
#[derive(Debug, Clone, Error)]
pub enum FactoryError {
    /// The factory has no way to build the requested type.
    #[error("no constructor available for service type {0}")]
    UnsupportedType(ServiceType),

    /// The factory produced an instance of a different type than requested.
    #[error("factory produced {produced} when {requested} was requested")]
    TypeMismatch {
        /// Requested service type.
        requested: ServiceType,
        /// Type actually produced.
        produced: ServiceType,
    },

    /// Construction of the service failed.
    #[error("failed to construct service type {service_type}: {source}")]
    Construction {
        /// Service type being constructed.
        service_type: ServiceType,
        /// Underlying failure.
        source: Arc<dyn std::error::Error + Send + Sync>,
    },
}

impl FactoryError {
    /// Wraps a construction failure for `service_type`.
    #[must_use]
    pub fn construction(
        service_type: ServiceType,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Construction {
            service_type,
            source: Arc::new(err),
        }
    }
}
