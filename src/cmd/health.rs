//! `envboard health` — probe the liveness endpoint of a running instance.
//!
//! Sends `GET /healthz` and exits non-zero unless the server answers
//! with a success status. Usable as a Docker `HEALTHCHECK` command in
//! images that ship without curl.

use http_body_util::BodyExt;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use crate::cli::HealthArgs;
use crate::error::EnvboardError;

pub async fn execute(args: HealthArgs) -> Result<(), EnvboardError> {
    let url = healthz_url(&args.url);
    let uri: hyper::Uri =
        url.parse().map_err(
            |e: hyper::http::uri::InvalidUri| EnvboardError::UriParse {
                source: Box::new(e),
            },
        )?;

    let connector = hyper_util::client::legacy::connect::HttpConnector::new();
    let client = Client::builder(TokioExecutor::new()).build(connector);

    let req = hyper::Request::builder()
        .uri(uri)
        .body(http_body_util::Full::new(bytes::Bytes::new()))
        .map_err(|e| EnvboardError::HttpRequest {
            source: Box::new(e),
        })?;

    let response = tokio::time::timeout(std::time::Duration::from_secs(10), client.request(req))
        .await
        .map_err(|_| EnvboardError::HttpRequest {
            source: "health check timed out after 10s".into(),
        })?
        .map_err(|e| EnvboardError::HttpRequest {
            source: Box::new(e),
        })?;

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .map_err(|e| EnvboardError::HttpRequest {
            source: Box::new(e),
        })?
        .to_bytes();

    if !status.is_success() {
        return Err(EnvboardError::HealthCheckFailed(status));
    }

    println!(
        "\u{2713} envboard is alive ({}): {}",
        args.url,
        String::from_utf8_lossy(&body).trim()
    );
    Ok(())
}

fn healthz_url(base: &str) -> String {
    format!("{}/healthz", base.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_healthz_once() {
        assert_eq!(healthz_url("http://pod:3000"), "http://pod:3000/healthz");
        assert_eq!(healthz_url("http://pod:3000/"), "http://pod:3000/healthz");
    }
}
