//! Unit tests for the service registry.

mod support;
