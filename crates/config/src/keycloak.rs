//! Keycloak setting accessors.
//!
//! Thin bindings of the Keycloak key pairs and defaults onto the generic
//! resolver; no behavior of their own beyond parameter binding.

use crate::constants::{
    DEFAULT_KC_AUTH_URL, DEFAULT_KC_REALM, KC_AUTH_REALM_ENV, KC_AUTH_REALM_PROP, KC_AUTH_URL_ENV,
    KC_AUTH_URL_PROP,
};
use crate::resolver::resolve_setting;

/// The configured Keycloak auth base URL.
pub fn auth_url() -> String {
    resolve_setting(KC_AUTH_URL_ENV, KC_AUTH_URL_PROP, DEFAULT_KC_AUTH_URL)
}

/// The configured Keycloak realm.
pub fn realm() -> String {
    resolve_setting(KC_AUTH_REALM_ENV, KC_AUTH_REALM_PROP, DEFAULT_KC_REALM)
}
