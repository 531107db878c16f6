//! envboard shows which environment variables reached a container.
//!
//! It reads a fixed catalog of variables plus anything prefixed `APP_` or
//! `LEAK_`, and renders key, value, and present/missing status as an HTML
//! page and a JSON document. Sensitive values can be partially masked
//! with `APP_REDACT_SECRETS=true`. Meant for teaching how ConfigMaps,
//! `env:` blocks, and Secrets surface inside a pod.
//!
//! # Architecture
//!
//! - [`cli`] -- Command-line argument parsing with clap derive macros.
//! - [`cmd`] -- Subcommand dispatch and execution (run, health, dump).
//! - [`catalog`] -- The fixed, ordered list of known variables.
//! - [`config`] -- Startup settings: port, redaction flag, prefixes.
//! - [`env`] -- The [`EnvSource`](env::EnvSource) seam over the process
//!   environment, with an in-memory implementation for tests.
//! - [`resolver`] -- Missing detection, masking, and the extras scan.
//! - [`meta`] -- Host and process facts shown with each response.
//! - [`api`] -- `GET /` and `GET /api/env` handlers.
//! - [`page`] -- HTML rendering.
//! - [`health`] -- `GET /healthz` liveness handler.
//! - [`error`] -- Unified error type using `thiserror`.
//! - [`logging`] -- Structured tracing setup with JSON and pretty-print output.
//! - [`server`] -- Axum router, shared state, and graceful shutdown.

// Binary crate — public functions are internal, not consumed by external users.
#![allow(clippy::missing_errors_doc)]

pub mod api;
pub mod catalog;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod env;
pub mod error;
pub mod health;
pub mod logging;
pub mod meta;
pub mod page;
pub mod resolver;
pub mod server;
