//! Structured logging setup using the `tracing` ecosystem.
//!
//! Configures a `tracing-subscriber` with either JSON output (for
//! production) or pretty-printed output (for TTY / local dev). Format
//! is auto-detected from the terminal but can be forced via `--json`
//! or `--pretty`.
//!
//! The requested level applies to envboard itself and to the
//! `tower_http` request traces; dependencies such as hyper stay at
//! `WARN` or quieter so `--log-level trace` does not drown the output
//! in connection-pool noise.

use tracing::Level;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::LogLevel;

const OWN_TARGETS: &[&str] = &[env!("CARGO_CRATE_NAME"), "tower_http"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

#[must_use]
pub fn resolve_format(pretty: bool, json: bool) -> LogFormat {
    if json {
        LogFormat::Json
    } else if pretty || std::io::IsTerminal::is_terminal(&std::io::stdout()) {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}

/// Per-target filter: `level` for our targets, at most `WARN` elsewhere.
#[must_use]
pub fn filter(level: Level) -> Targets {
    // More verbose levels compare greater, so min() picks the quieter one
    let dependency_level = std::cmp::min(level, Level::WARN);
    OWN_TARGETS
        .iter()
        .fold(Targets::new().with_default(dependency_level), |t, target| {
            t.with_target(*target, level)
        })
}

pub fn init(level: &LogLevel, format: LogFormat) {
    let filter = filter(level.to_tracing_level());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(false))
            .init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).init(),
    }
}
