//! `envboard run` — start the dashboard server.
//!
//! Reads settings from the process environment once, binds the listener,
//! and serves until Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::cli::RunArgs;
use crate::config::Settings;
use crate::env::{EnvSource, ProcessEnv};
use crate::error::EnvboardError;
use crate::logging;
use crate::server::{self, AppState};

pub async fn execute(args: RunArgs) -> Result<(), EnvboardError> {
    let log_format = logging::resolve_format(args.pretty, args.json);
    logging::init(&args.log_level, log_format);

    let env: Arc<dyn EnvSource> = Arc::new(ProcessEnv);
    let mut settings = Settings::from_env(env.as_ref());
    if let Some(port) = args.port {
        settings.port = port;
    }

    let addr: SocketAddr = format!("{}:{}", args.host, settings.port).parse()?;
    let redacting = settings.redact;

    let state = Arc::new(AppState::new(settings, env));
    let router = server::build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        addr = %addr,
        port = addr.port(),
        redacting,
        "envboard listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    tracing::info!("envboard stopped");
    Ok(())
}
