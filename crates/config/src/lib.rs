//! Configuration resolution for Apicurio services.
//!
//! This crate resolves named settings by checking environment variables,
//! then a process-wide property store, then a caller-supplied default, and
//! can harvest every setting under a key prefix into a flat map.

pub mod constants;
mod dotenv;
mod error;
pub mod keycloak;
pub mod props;
mod resolver;

pub use dotenv::load_dotenv;
pub use error::ConfigError;
pub use resolver::{env_var_or_none, resolve_prefixed_settings, resolve_setting};
