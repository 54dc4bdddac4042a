// ABOUTME: Tests for reading deployment settings from process environment variables.
// ABOUTME: Uses temp-env so each case sees an isolated variable set.

use gh_pages_deploy::config::{DEFAULT_API_URL, Environment};
use gh_pages_deploy::error::Error;
use gh_pages_deploy::types::Destination;

const ALL_VARS: [&str; 8] = [
    "GH_PAGES_PR_ID",
    "GH_PAGES_COMMITTER_NAME",
    "GH_PAGES_COMMITTER_EMAIL",
    "GH_PAGES_TOKEN",
    "GITHUB_TOKEN",
    "GH_PAGES_PREVIEW_HOST",
    "GH_PAGES_API_URL",
    "GITHUB_REPOSITORY",
];

fn with_vars<R>(set: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let vars: Vec<(&str, Option<&str>)> = ALL_VARS
        .iter()
        .map(|name| {
            let value = set.iter().find(|(k, _)| k == name).map(|(_, v)| *v);
            (*name, value)
        })
        .collect();
    temp_env::with_vars(vars, f)
}

#[test]
fn empty_environment_deploys_to_root() {
    let env = with_vars(&[], Environment::from_env).unwrap();
    assert_eq!(env.destination(), Destination::Root);
    assert!(env.token.is_none());
    assert_eq!(env.api_url, DEFAULT_API_URL);
}

#[test]
fn pr_id_selects_preview_destination() {
    let env = with_vars(&[("GH_PAGES_PR_ID", "42")], Environment::from_env).unwrap();
    assert_eq!(env.destination().to_string(), "pr/42");
}

#[test]
fn blank_pr_id_counts_as_unset() {
    let env = with_vars(&[("GH_PAGES_PR_ID", "  ")], Environment::from_env).unwrap();
    assert_eq!(env.destination(), Destination::Root);
}

#[test]
fn non_numeric_pr_id_is_rejected() {
    let err = with_vars(&[("GH_PAGES_PR_ID", "42/../..")], Environment::from_env).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidEnv {
            var: "GH_PAGES_PR_ID",
            ..
        }
    ));
}

#[test]
fn dedicated_token_wins_over_github_token() {
    let env = with_vars(
        &[("GH_PAGES_TOKEN", "pages"), ("GITHUB_TOKEN", "actions")],
        Environment::from_env,
    )
    .unwrap();
    assert_eq!(env.token.as_deref(), Some("pages"));
}

#[test]
fn github_token_is_the_fallback() {
    let env = with_vars(&[("GITHUB_TOKEN", "actions")], Environment::from_env).unwrap();
    assert_eq!(env.token.as_deref(), Some("actions"));
}

#[test]
fn committer_and_notification_settings_are_read() {
    let env = with_vars(
        &[
            ("GH_PAGES_COMMITTER_NAME", "Pages Bot"),
            ("GH_PAGES_COMMITTER_EMAIL", "bot@example.com"),
            ("GH_PAGES_PREVIEW_HOST", "previews.example.com"),
            ("GH_PAGES_API_URL", "http://localhost:9000"),
            ("GITHUB_REPOSITORY", "octo/site"),
        ],
        Environment::from_env,
    )
    .unwrap();

    assert_eq!(env.committer_name.as_deref(), Some("Pages Bot"));
    assert_eq!(env.committer_email.as_deref(), Some("bot@example.com"));
    assert_eq!(env.preview_host.as_deref(), Some("previews.example.com"));
    assert_eq!(env.api_url, "http://localhost:9000");
    assert_eq!(env.repository.as_deref(), Some("octo/site"));
}

#[test]
fn debug_output_redacts_token() {
    let env = with_vars(&[("GH_PAGES_TOKEN", "hunter2")], Environment::from_env).unwrap();
    let debug = format!("{env:?}");
    assert!(!debug.contains("hunter2"));
    assert!(debug.contains("***"));
}
