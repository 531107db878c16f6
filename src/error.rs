//! Unified error type for envboard.
//!
//! A variable that is unset is data, not an error; it shows up as a
//! `missing` record. [`EnvboardError`] only covers operational failures
//! of the CLI commands: binding the listener and probing a running
//! instance.

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EnvboardError {
    #[error("Invalid address: {0}")]
    AddressParse(#[from] std::net::AddrParseError),

    #[error("Invalid URI: {source}")]
    UriParse {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("HTTP request failed: {source}")]
    HttpRequest {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Health check failed with status {0}")]
    HealthCheckFailed(hyper::StatusCode),

    #[error("Invalid arguments: {0}")]
    Cli(#[from] clap::Error),

    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = EnvboardError::HealthCheckFailed(hyper::StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            err.to_string(),
            "Health check failed with status 503 Service Unavailable"
        );

        let err: EnvboardError = "not an address"
            .parse::<std::net::SocketAddr>()
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("Invalid address:"));
    }
}
