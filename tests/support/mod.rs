// ABOUTME: Shared helpers for integration tests.
// ABOUTME: Scripted command runner and project scaffolding.

#![allow(dead_code)]

pub mod scripted;

use gh_pages_deploy::config::Config;
use std::path::Path;

pub use scripted::{ScriptedRunner, committed, nothing_to_commit};

/// Build command that writes a small site into the default staging directory.
pub const SITE_BUILD: &str = "mkdir -p gh-pages-staging/docs && echo home > gh-pages-staging/index.html && echo guide > gh-pages-staging/docs/guide.html";

pub fn config_with(build_command: &str, commit_message: Option<&str>) -> Config {
    let mut value = serde_json::json!({ "buildCommand": build_command });
    if let Some(message) = commit_message {
        value["commitMessage"] = message.into();
    }
    Config::from_value(value).unwrap()
}

pub fn site_config() -> Config {
    config_with(SITE_BUILD, None)
}

/// Whether a usable git binary is on PATH.
pub fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| panic!("reading {}: {e}", path.display()))
}
