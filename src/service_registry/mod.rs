//! Keyed service registration and resolution.
//!
//! Independent registrars bind [`domain::ServiceKey`]s to
//! [`domain::ServiceType`]s while the registry is open; once sealed, the
//! registry is an immutable lookup table the host uses to resolve types and
//! hand them to its object factory. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Registry services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
