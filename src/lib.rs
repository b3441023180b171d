use errors::Error;

pub mod authentication;
pub mod configuration;
pub mod controller;
pub mod domain;
pub mod errors;
pub mod i18n;
pub mod notifications;
pub mod telemetry;

/// Crate-wide result alias
pub type Result<T, E = Error> = std::result::Result<T, E>;
