//! Service implementation descriptors.

use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Marker for types that may be registered as service implementations.
///
/// The registry never instantiates services; it only hands a
/// [`ServiceType`] to an external object factory.
pub trait Service: Send + Sync + 'static {}

/// Descriptor referring to a service implementation type, not an instance.
#[derive(Clone, Copy)]
pub struct ServiceType {
    id: TypeId,
    name: &'static str,
}

impl ServiceType {
    /// Returns the descriptor for `S`.
    #[must_use]
    pub fn of<S: Service>() -> Self {
        Self {
            id: TypeId::of::<S>(),
            name: type_name::<S>(),
        }
    }

    /// Returns `true` when this descriptor refers to `S`.
    #[must_use]
    pub fn is<S: Service>(&self) -> bool {
        self.id == TypeId::of::<S>()
    }

    /// Returns the underlying [`TypeId`].
    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.id
    }

    /// Returns the fully qualified type name.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.name
    }

    /// Returns the type name without its module path.
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        base.rsplit("::").next().unwrap_or(base)
    }
}

impl PartialEq for ServiceType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ServiceType {}

impl Hash for ServiceType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ServiceType").field(&self.name).finish()
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
