//! Shared world state for service registry BDD scenarios.

use rstest::fixture;
use servicemap::service_registry::{
    domain::{Service, ServiceKey, ServiceType},
    services::{ConfigurationError, ServiceRegistry},
};

/// Authentication service used in scenarios.
#[derive(Debug, Default)]
pub struct AuthServiceImpl;
impl Service for AuthServiceImpl {}

/// Mail service used in scenarios.
#[derive(Debug, Default)]
pub struct MailServiceImpl;
impl Service for MailServiceImpl {}

/// Logging service used in scenarios.
#[derive(Debug, Default)]
pub struct LogServiceImpl;
impl Service for LogServiceImpl {}

/// Scenario world for service registry behaviour tests.
#[derive(Debug, Default)]
pub struct RegistryWorld {
    /// The registry under test.
    pub registry: ServiceRegistry,
    /// Result of the last registration attempt made in a `when` step.
    pub last_register_result: Option<Result<(), ConfigurationError>>,
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> RegistryWorld {
    RegistryWorld::default()
}

/// Maps a scenario service description to its implementation type.
pub fn service_type_named(description: &str) -> Result<ServiceType, eyre::Report> {
    match description {
        "auth" => Ok(ServiceType::of::<AuthServiceImpl>()),
        "mail" => Ok(ServiceType::of::<MailServiceImpl>()),
        "log" => Ok(ServiceType::of::<LogServiceImpl>()),
        other => Err(eyre::eyre!("unknown scenario service '{other}'")),
    }
}

/// Builds a service key for a scenario name.
pub fn scenario_key(name: &str) -> Result<ServiceKey, eyre::Report> {
    ServiceKey::named(name).map_err(|err| eyre::eyre!("invalid scenario key '{name}': {err}"))
}
