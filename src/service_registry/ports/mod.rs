//! Port definitions for the service registry.
//!
//! Ports are the collaborators the registry relies on without owning: the
//! object factory that turns a service type into a live instance, the
//! localisation lookup that labels keys, and the registrars that populate
//! the registry during start-up.

pub mod factory;
pub mod localizer;
pub mod registrar;

pub use factory::{FactoryError, FactoryResult, ServiceFactory, ServiceInstance};
pub use localizer::Localizer;
pub use registrar::ServiceRegistrar;
