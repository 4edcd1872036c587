//! Setting resolution with env-over-property precedence.
//!
//! Responsibilities:
//! - Resolve a single setting by checking environment variables, then the
//!   process property store, then a caller-supplied default.
//! - Harvest every setting under an env/property key prefix into a flat map.
//!
//! Does NOT handle:
//! - Mutating the property store (see props.rs).
//! - `.env` file loading (see dotenv.rs).
//!
//! Invariants:
//! - Empty or whitespace-only values are treated as unset at every tier.
//! - Winning values are returned untrimmed; trimming feeds the blank test only.
//! - In the prefix scan, env-derived entries overwrite property-derived
//!   entries that normalize to the same key.

use std::collections::HashMap;

use crate::props;

/// Read an environment variable, returning `None` if it is unset, empty,
/// whitespace-only, or not valid unicode. Present values are returned as-is,
/// without trimming.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(non_blank)
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Resolve a setting by checking, in order: the `env_key` environment
/// variable, the `prop_key` property, and finally `default`.
///
/// A blank value at either tier falls through to the next one; absence is
/// never an error. The winning value is returned untrimmed.
pub fn resolve_setting(env_key: &str, prop_key: &str, default: &str) -> String {
    let value = env_var_or_none(env_key)
        .or_else(|| props::get(prop_key).and_then(non_blank))
        .unwrap_or_else(|| default.to_string());
    tracing::debug!(env_key, prop_key, value = %value, "Resolved config setting");
    value
}

/// Harvest every setting under the given prefixes into a flat map.
///
/// Property entries are collected first, keyed by the prefix-stripped suffix.
/// Environment entries are applied second and overwrite on key collision;
/// their suffixes are lowercased when `lowercase_env_keys` is set and always
/// have underscores replaced with periods. Environment entries whose name or
/// value is not valid unicode are skipped.
pub fn resolve_prefixed_settings(
    env_prefix: &str,
    prop_prefix: &str,
    lowercase_env_keys: bool,
) -> HashMap<String, String> {
    let mut settings = HashMap::new();

    for (key, value) in props::snapshot() {
        if let Some(suffix) = key.strip_prefix(prop_prefix) {
            settings.insert(suffix.to_string(), value);
        }
    }

    for (key, value) in std::env::vars_os() {
        let (Some(key), Some(value)) = (key.to_str(), value.to_str()) else {
            continue;
        };
        if let Some(suffix) = key.strip_prefix(env_prefix) {
            let suffix = if lowercase_env_keys {
                suffix.to_lowercase()
            } else {
                suffix.to_string()
            };
            settings.insert(suffix.replace('_', "."), value.to_string());
        }
    }

    tracing::debug!(?settings, "Resolved prefixed config settings");
    settings
}
