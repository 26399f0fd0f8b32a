//! Then steps for service registry BDD scenarios.

use super::world::{RegistryWorld, scenario_key, service_type_named};
use rstest_bdd_macros::then;
use servicemap::service_registry::services::ConfigurationError;

#[then(r#""{name}" resolves to the {service} service"#)]
fn resolves_to(world: &RegistryWorld, name: String, service: String) -> Result<(), eyre::Report> {
    let expected = service_type_named(&service)?;
    let resolved = world
        .registry
        .resolve_type(&scenario_key(&name)?)
        .map_err(|err| eyre::eyre!("resolve failed: {err}"))?;
    if resolved != expected {
        return Err(eyre::eyre!("expected {expected}, resolved {resolved}"));
    }
    Ok(())
}

#[then(r#"resolving "{name}" fails as an unknown service"#)]
fn resolving_fails(world: &RegistryWorld, name: String) -> Result<(), eyre::Report> {
    match world.registry.resolve_type(&scenario_key(&name)?) {
        Err(err) if err.key.name().as_str() == name => Ok(()),
        other => Err(eyre::eyre!("expected unknown service error, got {other:?}")),
    }
}

#[then(r#"registering "{name}" to the {service} service fails with a configuration error"#)]
fn registering_after_seal_fails(
    world: &mut RegistryWorld,
    name: String,
    service: String,
) -> Result<(), eyre::Report> {
    let key = scenario_key(&name)?;
    let result = world
        .registry
        .register_service(key, service_type_named(&service)?);
    if !matches!(result, Err(ConfigurationError::RegistrySealed { .. })) {
        return Err(eyre::eyre!("expected sealed registry error, got {result:?}"));
    }
    Ok(())
}

#[then("the registration succeeds")]
fn registration_succeeds(world: &RegistryWorld) -> Result<(), eyre::Report> {
    match &world.last_register_result {
        Some(Ok(())) => Ok(()),
        other => Err(eyre::eyre!("expected successful registration, got {other:?}")),
    }
}

#[then("the registry lists {count:usize} entries")]
fn registry_lists(world: &RegistryWorld, count: usize) -> Result<(), eyre::Report> {
    let entries = world.registry.all_entries();
    if entries.len() != count {
        return Err(eyre::eyre!(
            "expected {count} entries, found {}",
            entries.len()
        ));
    }
    Ok(())
}

#[then("the registration fails with a conflicting binding error")]
fn registration_conflicts(world: &RegistryWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_register_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing registration result in scenario world"))?;
    if !matches!(result, Err(ConfigurationError::ConflictingBinding(_))) {
        return Err(eyre::eyre!("expected conflicting binding error, got {result:?}"));
    }
    Ok(())
}

#[then("the registration fails with a duplicate registration error")]
fn registration_duplicates(world: &RegistryWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_register_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing registration result in scenario world"))?;
    if !matches!(result, Err(ConfigurationError::DuplicateRegistration { .. })) {
        return Err(eyre::eyre!(
            "expected duplicate registration error, got {result:?}"
        ));
    }
    Ok(())
}
