//! Startup-time settings derived from the environment.
//!
//! [`Settings`] is built once before the server binds and shared
//! read-only with every request. Malformed values never fail startup;
//! they fall back to defaults.

use crate::env::EnvSource;

pub const DEFAULT_PORT: u16 = 3000;

/// Shown in place of any value that is unset or blank.
pub const NOT_FOUND_MSG: &str = "configuration error, value not found";

/// Prefixes watched for variables outside the catalog. `LEAK_` shows how
/// arbitrary variables end up visible to the app.
pub const EXTRA_PREFIXES: &[&str] = &["APP_", "LEAK_"];

pub const PORT_VARS: &[&str] = &["PORT", "APP_PORT"];
pub const REDACT_VAR: &str = "APP_REDACT_SECRETS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub port: u16,
    pub redact: bool,
    pub not_found_msg: String,
    pub prefixes: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            redact: false,
            not_found_msg: NOT_FOUND_MSG.to_string(),
            prefixes: EXTRA_PREFIXES.iter().map(|p| (*p).to_string()).collect(),
        }
    }
}

impl Settings {
    #[must_use]
    pub fn from_env(env: &dyn EnvSource) -> Self {
        Self {
            port: resolve_port(env),
            redact: redact_enabled(env),
            ..Self::default()
        }
    }
}

/// First non-empty of `PORT`, `APP_PORT`; anything unparsable yields the default.
#[must_use]
pub fn resolve_port(env: &dyn EnvSource) -> u16 {
    let raw = PORT_VARS
        .iter()
        .filter_map(|key| env.get(key))
        .find(|v| !v.is_empty());

    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(value = %value, default = DEFAULT_PORT, "invalid port, using default");
            DEFAULT_PORT
        }),
        None => DEFAULT_PORT,
    }
}

#[must_use]
pub fn redact_enabled(env: &dyn EnvSource) -> bool {
    env.get(REDACT_VAR)
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}
