//! Build script for embedding toolchain and git metadata at compile time.
//!
//! Sets `cargo:rustc-env` variables consumed by the `meta` module and the
//! CLI version banner via `env!()`. Falls back to `"unknown"` when git or
//! rustc cannot be queried (e.g. Docker builds without `.git`).

use std::process::Command;

fn command_output(program: &str, args: &[&str]) -> Option<String> {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Try an override env var first (for Docker builds), then fall back to git.
fn git_or_env(env_key: &str, args: &[&str]) -> String {
    std::env::var(env_key)
        .ok()
        .filter(|s| !s.is_empty() && s != "unknown")
        .or_else(|| command_output("git", args))
        .unwrap_or_else(|| "unknown".into())
}

fn main() {
    // Re-run when HEAD changes (branch switch, new commit)
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");
    println!("cargo:rerun-if-env-changed=ENVBOARD_GIT_SHORT_OVERRIDE");

    println!(
        "cargo:rustc-env=ENVBOARD_GIT_SHORT={}",
        git_or_env(
            "ENVBOARD_GIT_SHORT_OVERRIDE",
            &["rev-parse", "--short", "HEAD"]
        )
    );

    let target = std::env::var("TARGET").unwrap_or_else(|_| "unknown".into());
    println!("cargo:rustc-env=ENVBOARD_TARGET={target}");

    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".into());
    let rustc_version =
        command_output(&rustc, &["--version"]).unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=ENVBOARD_RUSTC_VERSION={rustc_version}");
}
