//! Command-line interface definitions using clap derive macros.
//!
//! Contains the top-level [`Cli`] parser, the [`Commands`] enum for
//! subcommands (run, health, dump), and their associated argument
//! structs. Running with no subcommand starts the server, which is what
//! a container entrypoint expects.

use clap::{Args, FromArgMatches, Parser, Subcommand, ValueEnum};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("ENVBOARD_GIT_SHORT"),
    " ",
    env!("ENVBOARD_TARGET"),
    ")"
);

#[derive(Parser)]
#[command(
    name = "envboard",
    version,
    long_version = LONG_VERSION,
    about = "Show which environment variables reached this container",
    propagate_version = true,
    after_help = "\x1b[1mQuick start:\x1b[0m\n  \
        envboard                             Serve on $PORT / $APP_PORT (default 3000)\n  \
        envboard dump                        Print the variable table and exit\n  \
        envboard health                      Probe a running instance"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the dashboard server (default)
    Run(Box<RunArgs>),

    /// Check liveness of a running instance
    Health(HealthArgs),

    /// Print resolved variables without starting a server
    Dump(DumpArgs),
}

#[derive(Args, Clone)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        envboard run                          Port from $PORT / $APP_PORT\n  \
        envboard run -p 8080 --pretty         Local dev mode\n  \
        APP_REDACT_SECRETS=true envboard run  Mask secret values")]
pub struct RunArgs {
    /// Listen port (overrides $PORT and $APP_PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Listen address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    // -- Logging --
    /// Log level
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info", ignore_case = true)]
    pub log_level: LogLevel,

    /// Force pretty (human-readable) log output
    #[arg(long)]
    pub pretty: bool,

    /// Force JSON log output (overrides TTY detection)
    #[arg(long, conflicts_with = "pretty")]
    pub json: bool,
}

impl RunArgs {
    /// Run arguments for a bare `envboard` invocation: env vars and defaults only.
    pub fn from_env() -> Result<Self, clap::Error> {
        let cmd = Self::augment_args(clap::Command::new("envboard").no_binary_name(true));
        let matches = cmd.try_get_matches_from(std::iter::empty::<String>())?;
        Self::from_arg_matches(&matches)
    }
}

#[derive(Args)]
pub struct HealthArgs {
    /// URL of the running instance
    #[arg(default_value = "http://localhost:3000")]
    pub url: String,
}

#[derive(Args)]
pub struct DumpArgs {
    /// Output as JSON (same shape as GET /api/env)
    #[arg(long)]
    pub json: bool,

    /// Mask secrets even if APP_REDACT_SECRETS is not set
    #[arg(long)]
    pub redact: bool,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}
