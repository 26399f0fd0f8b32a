//! Given steps for service registry BDD scenarios.

use super::world::{RegistryWorld, scenario_key, service_type_named};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use servicemap::service_registry::services::{RegistryConfig, ServiceRegistry};

#[given("an open service registry")]
fn open_registry(world: &mut RegistryWorld) {
    world.registry = ServiceRegistry::new();
    world.last_register_result = None;
}

#[given("a strict service registry")]
fn strict_registry(world: &mut RegistryWorld) {
    world.registry = ServiceRegistry::new().with_config(RegistryConfig::strict());
    world.last_register_result = None;
}

#[given(r#""{name}" is registered to the {service} service"#)]
fn service_registered(
    world: &mut RegistryWorld,
    name: String,
    service: String,
) -> Result<(), eyre::Report> {
    let key = scenario_key(&name)?;
    let service_type = service_type_named(&service)?;
    world
        .registry
        .register_service(key, service_type)
        .wrap_err("register service for scenario")
}
