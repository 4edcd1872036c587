//! `.env` file loading.
//!
//! Responsibilities:
//! - Seed the process environment from a `.env` file before any settings are
//!   resolved.
//! - Enforce the `DOTENV_DISABLED` gate so tests and containers can opt out.
//!
//! Does NOT handle:
//! - Reading individual settings (see resolver.rs).

use crate::error::ConfigError;

fn dotenv_disabled() -> bool {
    matches!(
        std::env::var("DOTENV_DISABLED").ok().as_deref(),
        Some("true") | Some("1")
    )
}

fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}

/// Load environment variables from a `.env` file if present.
///
/// If the `DOTENV_DISABLED` environment variable is set to "true" or "1",
/// the `.env` file will not be loaded. A missing `.env` file is silently
/// ignored.
///
/// # Errors
///
/// Returns an error if the `.env` file exists but has invalid syntax
/// (`ConfigError::DotenvParse`) or cannot be read (`ConfigError::DotenvIo`).
///
/// SAFETY: Error messages never include raw .env line contents to prevent
/// secret leakage.
pub fn load_dotenv() -> Result<(), ConfigError> {
    if dotenv_disabled() {
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if is_not_found(&e) => Ok(()),
        Err(dotenvy::Error::LineParse(_, idx)) => Err(ConfigError::DotenvParse { error_index: idx }),
        Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
            kind: io_err.kind(),
        }),
        Err(_) => Err(ConfigError::DotenvUnknown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::global_test_lock;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_load_dotenv_honors_disabled_gate() {
        let _lock = global_test_lock().lock().unwrap();

        temp_env::with_vars([("DOTENV_DISABLED", Some("1"))], || {
            assert!(load_dotenv().is_ok());
        });
        temp_env::with_vars([("DOTENV_DISABLED", Some("true"))], || {
            assert!(load_dotenv().is_ok());
        });
    }

    #[test]
    #[serial]
    fn test_dotenv_disabled_requires_exact_values() {
        let _lock = global_test_lock().lock().unwrap();

        temp_env::with_vars([("DOTENV_DISABLED", Some("yes"))], || {
            assert!(!dotenv_disabled());
        });
        temp_env::with_vars([("DOTENV_DISABLED", None::<&str>)], || {
            assert!(!dotenv_disabled());
        });
    }
}
