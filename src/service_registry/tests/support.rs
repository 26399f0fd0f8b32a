//! Shared fixtures for service registry unit tests.

use crate::service_registry::domain::{I18nKey, Service, ServiceKey};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct AuthServiceImpl;
impl Service for AuthServiceImpl {}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct MailServiceImpl;
impl Service for MailServiceImpl {}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct LogServiceImpl;
impl Service for LogServiceImpl {}

#[derive(Debug, Clone, Copy)]
pub enum LabelKey {
    Authorisation,
    Mail,
}

impl I18nKey for LabelKey {
    fn key_name(&self) -> &str {
        match self {
            Self::Authorisation => "Authorisation",
            Self::Mail => "Mail",
        }
    }
}

/// Clock pinned to a single instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub fn key(name: &str) -> ServiceKey {
    ServiceKey::named(name).expect("valid service key")
}
