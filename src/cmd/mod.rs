//! Subcommand dispatch and execution.
//!
//! The [`dispatch`] function routes the parsed CLI to the appropriate
//! subcommand handler: [`run`], [`health`], or [`dump`]. A bare
//! `envboard` invocation runs the server with run arguments taken from
//! env vars and defaults, so `LOG_LEVEL`/`HOST` are only parsed on the
//! run path.

pub mod dump;
pub mod health;
pub mod run;

use crate::cli::{Cli, Commands, RunArgs};
use crate::error::EnvboardError;

pub async fn dispatch(cli: Cli) -> Result<(), EnvboardError> {
    match cli.command {
        Some(Commands::Run(args)) => run::execute(*args).await,
        Some(Commands::Health(args)) => health::execute(args).await,
        Some(Commands::Dump(ref args)) => dump::execute(args),
        None => run::execute(RunArgs::from_env()?).await,
    }
}
