//! `GET /healthz` liveness endpoint.
//!
//! Returns a plain `ok` as long as the process can answer HTTP. It never
//! looks at the environment, so a pod with every variable missing still
//! passes its liveness probe.

pub const HEALTH_BODY: &str = "ok";

pub async fn healthz_handler() -> &'static str {
    HEALTH_BODY
}
