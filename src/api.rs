//! `GET /` and `GET /api/env` handlers.
//!
//! Both routes compose the same [`EnvReport`]: fresh metadata, the
//! shared not-configured message, the redaction flag, catalog records
//! in catalog order and extras in key order. `/api/env` serializes it
//! as JSON; `/` renders it through [`page::render`](crate::page::render).

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde::Serialize;

use crate::meta::{self, Metadata};
use crate::page;
use crate::resolver::{self, VariableRecord};
use crate::server::AppState;

// Field order is the JSON key order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvReport {
    pub meta: Metadata,
    pub not_found_msg: String,
    pub redacting: bool,
    pub fixed: Vec<VariableRecord>,
    pub extras: Vec<VariableRecord>,
}

#[must_use]
pub fn build_report(state: &AppState) -> EnvReport {
    let dump = resolver::build_dump(state.env.as_ref(), &state.settings);
    EnvReport {
        meta: meta::build_meta(),
        not_found_msg: state.settings.not_found_msg.clone(),
        redacting: state.settings.redact,
        fixed: dump.fixed,
        extras: dump.extras,
    }
}

pub async fn env_handler(State(state): State<Arc<AppState>>) -> Json<EnvReport> {
    let report = build_report(&state);
    tracing::debug!(
        fixed = report.fixed.len(),
        extras = report.extras.len(),
        "serving env report"
    );
    Json(report)
}

pub async fn page_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(page::render(&build_report(&state)))
}
