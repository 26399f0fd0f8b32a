//! Step definitions for service registry BDD scenarios.

pub mod world;

mod given;
mod then;
mod when;
