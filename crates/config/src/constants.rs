//! Centralized constants for the Apicurio config crate.
//!
//! Key names and defaults for the settings this crate resolves, kept in one
//! place so accessors and tests never duplicate string literals.

// =============================================================================
// Keycloak Authentication
// =============================================================================

/// Environment variable holding the Keycloak auth base URL.
pub const KC_AUTH_URL_ENV: &str = "APICURIO_KC_AUTH_URL";

/// Property key holding the Keycloak auth base URL.
pub const KC_AUTH_URL_PROP: &str = "apicurio.kc.auth.rootUrl";

/// Default Keycloak auth base URL when neither source is set.
pub const DEFAULT_KC_AUTH_URL: &str = "https://localhost:8443/auth";

/// Environment variable holding the Keycloak realm name.
pub const KC_AUTH_REALM_ENV: &str = "APICURIO_KC_AUTH_REALM";

/// Property key holding the Keycloak realm name.
pub const KC_AUTH_REALM_PROP: &str = "apicurio.kc.auth.realm";

/// Default Keycloak realm when neither source is set.
pub const DEFAULT_KC_REALM: &str = "apicurio";
