//! The fixed, ordered list of variables the dashboard knows about.
//!
//! Entries mirror a typical Kubernetes deployment: plain settings that
//! arrive through a ConfigMap or `env:` block, and credentials that
//! arrive through a Secret.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    Config,
    Secret,
    /// Discovered by prefix scan, not part of the catalog.
    Extra,
}

impl Group {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Secret => "secret",
            Self::Extra => "extra",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableDefinition {
    pub key: &'static str,
    pub group: Group,
    pub sensitive: bool,
    pub note: &'static str,
}

const fn config(key: &'static str, note: &'static str) -> VariableDefinition {
    VariableDefinition {
        key,
        group: Group::Config,
        sensitive: false,
        note,
    }
}

const fn secret(key: &'static str, note: &'static str) -> VariableDefinition {
    VariableDefinition {
        key,
        group: Group::Secret,
        sensitive: true,
        note,
    }
}

pub const CATALOG: &[VariableDefinition] = &[
    // ConfigMap / env
    config("APP_NAME", "name"),
    config("APP_VERSION", "version"),
    config("APP_AUTHOR", "author"),
    config("APP_ENV", "environment"),
    config("APP_PORT", "port"),
    config("APP_DEBUG", "debug"),
    config("APP_REGION", "region"),
    config("APP_TIMEZONE", "timezone"),
    config("APP_LOG_LEVEL", "log level"),
    config("APP_ALLOWED_IPS", "allowlist"),
    config("APP_FEATURE_FLAGS", "flags"),
    config("APP_BUILD_ID", "build"),
    config("APP_COMMIT_SHA", "commit"),
    config("APP_DEPLOYMENT_ID", "deployment"),
    config("APP_DB_HOST", "db host"),
    config("APP_DB_PORT", "db port"),
    config("APP_DB_NAME", "db name"),
    config("APP_DB_USER", "db user"),
    config("APP_REDIS_URL", "redis url"),
    config("APP_PUBLIC_NOTE", "note"),
    config("APP_REDACT_SECRETS", "mask secrets"),
    // Secret
    secret("APP_PASSWORD", "password"),
    secret("APP_DB_PASSWORD", "db password"),
    secret("APP_API_KEY", "api key"),
    secret("APP_JWT_SECRET", "jwt secret"),
    secret("APP_WEBHOOK_TOKEN", "webhook token"),
    secret("APP_ENCRYPTION_KEY", "encryption key"),
    secret("APP_OAUTH_CLIENT_SECRET", "oauth secret"),
    secret("APP_SSH_PRIVATE_KEY", "ssh key"),
];

#[must_use]
pub fn contains(key: &str) -> bool {
    CATALOG.iter().any(|def| def.key == key)
}
