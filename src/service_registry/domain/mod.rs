//! Domain model for keyed service registration.
//!
//! The service registry domain models service identity (keys and the names
//! that discriminate them), service implementation descriptors, and the
//! bindings that tie one to the other. Container and localisation concerns
//! stay outside the domain boundary and are reached through ports.

mod binding;
mod error;
mod key;
mod label;
mod name;
mod service_type;
mod state;

pub use binding::ServiceBinding;
pub use error::{ParseRegistryStateError, ServiceKeyError};
pub use key::ServiceKey;
pub use label::I18nKey;
pub use name::ServiceName;
pub use service_type::{Service, ServiceType};
pub use state::RegistryState;
