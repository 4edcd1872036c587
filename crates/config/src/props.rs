//! Process-wide settable property store.
//!
//! Responsibilities:
//! - Hold the property tier of the lookup chain: string keys and values
//!   settable programmatically at any point in the process lifetime.
//! - Provide point-in-time snapshots for prefix scans.
//!
//! Does NOT handle:
//! - Environment variables (read directly by the resolver, see resolver.rs).
//! - Persistence of any kind; the store lives and dies with the process.
//!
//! Invariants:
//! - A single process-global table guarded by an RwLock.
//! - A poisoned lock is recovered rather than propagated; entries are plain
//!   owned strings, so a panicking writer cannot leave a torn value behind.

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

fn store() -> &'static RwLock<HashMap<String, String>> {
    static STORE: OnceLock<RwLock<HashMap<String, String>>> = OnceLock::new();
    STORE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Set a property, overwriting any existing value under the same key.
pub fn set(key: impl Into<String>, value: impl Into<String>) {
    let mut table = store().write().unwrap_or_else(|e| e.into_inner());
    table.insert(key.into(), value.into());
}

/// Current value of a property, if set.
pub fn get(key: &str) -> Option<String> {
    let table = store().read().unwrap_or_else(|e| e.into_inner());
    table.get(key).cloned()
}

/// Remove a property, returning the value it held.
pub fn remove(key: &str) -> Option<String> {
    let mut table = store().write().unwrap_or_else(|e| e.into_inner());
    table.remove(key)
}

/// Point-in-time copy of the whole store.
pub fn snapshot() -> HashMap<String, String> {
    let table = store().read().unwrap_or_else(|e| e.into_inner());
    table.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_set_get_remove_roundtrip() {
        let key = "apicurio.test.props.roundtrip";

        assert_eq!(get(key), None);

        set(key, "first");
        assert_eq!(get(key), Some("first".to_string()));

        // Overwrite under the same key
        set(key, "second");
        assert_eq!(get(key), Some("second".to_string()));

        assert_eq!(remove(key), Some("second".to_string()));
        assert_eq!(get(key), None);
        assert_eq!(remove(key), None);
    }

    #[test]
    #[serial]
    fn test_snapshot_is_a_point_in_time_copy() {
        let key = "apicurio.test.props.snapshot";

        set(key, "before");
        let snap = snapshot();
        assert_eq!(snap.get(key), Some(&"before".to_string()));

        // Mutations after the snapshot must not show up in it
        set(key, "after");
        assert_eq!(snap.get(key), Some(&"before".to_string()));
        assert_eq!(get(key), Some("after".to_string()));

        remove(key);
    }
}
