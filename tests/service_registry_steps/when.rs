//! When steps for service registry BDD scenarios.

use super::world::{RegistryWorld, scenario_key, service_type_named};
use rstest_bdd_macros::when;

#[when("the registry is sealed")]
fn seal_registry(world: &mut RegistryWorld) {
    world.registry.seal();
}

#[when(r#""{name}" is registered to the {service} service again"#)]
fn register_again(
    world: &mut RegistryWorld,
    name: String,
    service: String,
) -> Result<(), eyre::Report> {
    let key = scenario_key(&name)?;
    let service_type = service_type_named(&service)?;
    world.last_register_result = Some(world.registry.register_service(key, service_type));
    Ok(())
}
