//! Servicemap: a keyed service registry.
//!
//! Modules of a host application register service implementation types
//! under stable keys during start-up. After the configuration phase the
//! registry is sealed and shared read-only, so the host can resolve a key to
//! a type and pass it to whatever object factory it uses.
//!
//! # Architecture
//!
//! Servicemap follows hexagonal architecture principles:
//!
//! - **Domain**: Pure registry data with no container dependencies
//! - **Ports**: Abstract trait interfaces for the object factory,
//!   localisation and registrars
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`service_registry`]: Registration, sealing and resolution

pub mod service_registry;

#[doc(hidden)]
pub use inventory;
