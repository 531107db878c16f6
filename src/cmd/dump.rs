//! `envboard dump` — print the resolved variable set and exit.
//!
//! Handy inside `kubectl exec` sessions where no browser is available.
//! Text output is an aligned table; `--json` emits the same document
//! as `GET /api/env`.

use std::fmt::Write;

use crate::api::EnvReport;
use crate::cli::DumpArgs;
use crate::config::Settings;
use crate::env::ProcessEnv;
use crate::error::EnvboardError;
use crate::meta;
use crate::resolver::{self, VariableRecord};

pub fn execute(args: &DumpArgs) -> Result<(), EnvboardError> {
    let env = ProcessEnv;
    let mut settings = Settings::from_env(&env);
    settings.redact |= args.redact;

    let dump = resolver::build_dump(&env, &settings);
    let report = EnvReport {
        meta: meta::build_meta(),
        not_found_msg: settings.not_found_msg,
        redacting: settings.redact,
        fixed: dump.fixed,
        extras: dump.extras,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_table(&report));
    }
    Ok(())
}

fn format_table(report: &EnvReport) -> String {
    let rows: Vec<&VariableRecord> = report.fixed.iter().chain(&report.extras).collect();
    let key_width = rows.iter().map(|r| r.key.len()).max().unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "envboard @ {} (redacting: {})",
        report.meta.hostname, report.redacting
    );
    for record in rows {
        let status = if record.is_missing() { "MISSING" } else { "ok" };
        let _ = writeln!(
            out,
            "  {:<key_width$}  {:<7}  {:<6}  {}",
            record.key,
            status,
            record.group.as_str(),
            record.value,
        );
    }
    out
}
