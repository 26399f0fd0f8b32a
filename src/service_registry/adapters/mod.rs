//! Adapter implementations for service registry ports.

pub mod catalog;
pub mod constructor;
pub mod linked;

pub use catalog::CatalogLocalizer;
pub use constructor::ConstructorFactory;
pub use linked::{LinkedRegistrar, RegisterFn, linked_registrars};
