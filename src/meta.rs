//! Process and host facts shown alongside the variable table.
//!
//! [`build_meta`] is called on every request; nothing here is cached
//! except the process start instant, which [`mark_process_start`] pins
//! as early as possible in `main`.

use std::sync::OnceLock;
use std::time::Instant;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

static PROCESS_START: OnceLock<Instant> = OnceLock::new();

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub timestamp: String,
    pub hostname: String,
    pub platform: String,
    pub runtime_version: String,
    pub pid: u32,
    pub uptime_seconds: u64,
}

/// Records the process start. Later calls keep the first instant.
pub fn mark_process_start() -> Instant {
    *PROCESS_START.get_or_init(Instant::now)
}

/// Whole seconds since [`mark_process_start`], or since first use if it
/// was never called (tests, library embedding).
#[must_use]
pub fn process_uptime_secs() -> u64 {
    uptime_secs_since(mark_process_start())
}

#[must_use]
pub fn uptime_secs_since(start: Instant) -> u64 {
    start.elapsed().as_secs()
}

#[must_use]
pub fn build_meta() -> Metadata {
    Metadata {
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        hostname: hostname(),
        platform: std::env::consts::OS.to_string(),
        runtime_version: runtime_version().to_string(),
        pid: std::process::id(),
        uptime_seconds: process_uptime_secs(),
    }
}

#[must_use]
pub const fn runtime_version() -> &'static str {
    env!("ENVBOARD_RUSTC_VERSION")
}

#[must_use]
pub fn hostname() -> String {
    gethostname::gethostname()
        .into_string()
        .ok()
        .filter(|h| !h.is_empty())
        .or_else(|| std::env::var("HOSTNAME").ok().filter(|h| !h.is_empty()))
        .unwrap_or_else(|| "unknown".to_string())
}
