//! Service layer for keyed service registration and resolution.
//!
//! Provides [`ServiceRegistry`], the Open/Sealed registration table, plus
//! the pieces a host needs around it: [`RegistryBootstrap`] to run
//! registrars and seal in one step, [`SharedServiceRegistry`] for
//! multi-threaded registration, [`RegistryConfig`] and the
//! [`RegistrySnapshot`] introspection view.

mod bootstrap;
mod config;
mod error;
mod registry;
mod scope;
mod shared;
mod snapshot;

pub use bootstrap::RegistryBootstrap;
pub use config::{DuplicatePolicy, RegistryConfig};
pub use error::{
    BindingConflict, ConfigurationError, ConfigurationResult, ResolveError, UnknownServiceError,
};
pub use registry::ServiceRegistry;
pub use scope::RegistrarScope;
pub use shared::SharedServiceRegistry;
pub use snapshot::{RegistrySnapshot, SnapshotEntry};
