//! Terminal-styled HTML rendering of an [`EnvReport`].
//!
//! Every piece of dynamic text goes through [`escape`]; values come
//! straight from the environment and may contain markup.

use std::fmt::Write;

use crate::api::EnvReport;
use crate::catalog::Group;
use crate::resolver::VariableRecord;

const STYLE: &str = "\
body{background:#0b0f0b;color:#33ff66;font-family:ui-monospace,Menlo,Consolas,monospace;margin:0;padding:2rem}\
h1{font-size:1.4rem;margin:0 0 .5rem}\
h2{font-size:1.1rem;margin:2rem 0 .5rem;color:#9cffb5}\
.meta{color:#7fbf8f;margin-bottom:1rem}\
.meta span{margin-right:1.5rem}\
.banner{border:1px solid #33ff66;padding:.5rem 1rem;display:inline-block}\
table{border-collapse:collapse;width:100%}\
th,td{border-bottom:1px solid #1d3323;padding:.35rem .6rem;text-align:left;vertical-align:top}\
th{color:#9cffb5}\
td.value{word-break:break-all}\
tr.missing td{color:#ff5f56}\
.badge{font-size:.75rem;padding:0 .4rem;border:1px solid currentColor}";

/// Minimal HTML escaping for text and double-quoted attribute contexts.
#[must_use]
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[must_use]
pub fn render(report: &EnvReport) -> String {
    let meta = &report.meta;
    let mut html = String::with_capacity(8 * 1024);

    // write! to String is infallible (only fails on OOM which is unrecoverable)
    let _ = write!(
        html,
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>envboard</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>&gt; envboard_</h1>\n<div class=\"meta\">\
         <span>host: {}</span><span>platform: {}</span><span>runtime: {}</span>\
         <span>pid: {}</span><span>uptime: {}s</span><span>at: {}</span></div>\n",
        escape(&meta.hostname),
        escape(&meta.platform),
        escape(&meta.runtime_version),
        meta.pid,
        meta.uptime_seconds,
        escape(&meta.timestamp),
    );

    let banner = if report.redacting {
        "secrets are masked (APP_REDACT_SECRETS=true)"
    } else {
        "secrets are shown in clear text (set APP_REDACT_SECRETS=true to mask)"
    };
    let _ = writeln!(html, "<div class=\"banner\">{banner}</div>");

    let config: Vec<&VariableRecord> = report
        .fixed
        .iter()
        .filter(|r| r.group == Group::Config)
        .collect();
    let secrets: Vec<&VariableRecord> = report
        .fixed
        .iter()
        .filter(|r| r.group == Group::Secret)
        .collect();
    let extras: Vec<&VariableRecord> = report.extras.iter().collect();

    write_table(&mut html, "ConfigMap / env", &config);
    write_table(&mut html, "Secret", &secrets);
    if extras.is_empty() {
        let _ = writeln!(
            html,
            "<h2>Extras</h2>\n<p>no other APP_ or LEAK_ variables found</p>"
        );
    } else {
        write_table(&mut html, "Extras", &extras);
    }

    let missing = report
        .fixed
        .iter()
        .chain(&report.extras)
        .filter(|r| r.is_missing())
        .count();
    let _ = write!(
        html,
        "<p class=\"meta\">{missing} missing, shown as &quot;{}&quot;</p>\n</body>\n</html>\n",
        escape(&report.not_found_msg),
    );

    html
}

fn write_table(html: &mut String, title: &str, records: &[&VariableRecord]) {
    let _ = write!(
        html,
        "<h2>{}</h2>\n<table>\n<tr><th>key</th><th>value</th><th>status</th><th>note</th></tr>\n",
        escape(title)
    );
    for record in records {
        let class = if record.is_missing() { "missing" } else { "ok" };
        let status = if record.is_missing() { "missing" } else { "ok" };
        let _ = writeln!(
            html,
            "<tr class=\"{class}\"><td>{}</td><td class=\"value\">{}</td>\
             <td><span class=\"badge\">{status}</span></td><td>{}</td></tr>",
            escape(&record.key),
            escape(&record.value),
            escape(&record.note),
        );
    }
    html.push_str("</table>\n");
}
