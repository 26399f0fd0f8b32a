//! Registrars collected at link time.
//!
//! Modules submit a registrar with [`service_registrar!`](crate::service_registrar)
//! and the host picks all of them up through
//! [`RegistryBootstrap::with_linked_registrars`](crate::service_registry::services::RegistryBootstrap::with_linked_registrars),
//! without a central list naming every module.

use crate::service_registry::{
    ports::ServiceRegistrar,
    services::{ConfigurationResult, RegistrarScope},
};

/// Registration function of a linked registrar.
pub type RegisterFn = fn(&mut RegistrarScope<'_>) -> ConfigurationResult<()>;

/// A registrar submitted to the link-time collection.
#[derive(Debug, Clone, Copy)]
pub struct LinkedRegistrar {
    name: &'static str,
    register: RegisterFn,
}

impl LinkedRegistrar {
    /// Creates a linked registrar. Usable in `static` position.
    #[must_use]
    pub const fn new(name: &'static str, register: RegisterFn) -> Self {
        Self { name, register }
    }
}

inventory::collect!(LinkedRegistrar);

impl ServiceRegistrar for LinkedRegistrar {
    fn name(&self) -> &str {
        self.name
    }

    fn register_services(&self, scope: &mut RegistrarScope<'_>) -> ConfigurationResult<()> {
        (self.register)(scope)
    }
}

/// Returns every submitted registrar, sorted by name.
#[must_use]
pub fn linked_registrars() -> Vec<&'static LinkedRegistrar> {
    let mut registrars: Vec<_> = inventory::iter::<LinkedRegistrar>.into_iter().collect();
    registrars.sort_by_key(|registrar| registrar.name);
    registrars
}

/// Submits a registrar to the link-time collection.
///
/// ```ignore
/// fn register_mail(scope: &mut RegistrarScope<'_>) -> ConfigurationResult<()> {
///     scope.register::<SmtpMailer>(ServiceKey::named("Mail")?)
/// }
///
/// servicemap::service_registrar!("mail", register_mail);
/// ```
#[macro_export]
macro_rules! service_registrar {
    ($name:expr, $register:expr) => {
        $crate::inventory::submit! {
            $crate::service_registry::adapters::LinkedRegistrar::new($name, $register)
        }
    };
}
