// ABOUTME: Resolves the URL the hosting branch is cloned from and pushed to.
// ABOUTME: Reads origin's fetch URL and injects a token into https remotes.

use crate::error::{Error, Result};
use crate::git::Git;

pub const FETCH_URL_MARKER: &str = "Fetch URL:";

const HTTPS_PREFIX: &str = "https://";

/// Extract the fetch URL from `git remote show` output.
pub fn parse_fetch_url(output: &str) -> Option<&str> {
    output
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(FETCH_URL_MARKER))
        .map(str::trim)
        .filter(|url| !url.is_empty())
}

/// Embed `token` as credentials in an https URL. Other URLs are returned as-is.
pub fn authenticate(url: &str, token: Option<&str>) -> String {
    match (token, url.strip_prefix(HTTPS_PREFIX)) {
        (Some(token), Some(rest)) => format!("{HTTPS_PREFIX}{token}@{rest}"),
        _ => url.to_string(),
    }
}

pub const ORIGIN: &str = "origin";

/// Look up origin's fetch URL in `git`'s directory and authenticate it.
///
/// `remote show -n` echoes an unknown name back as its own fetch URL, so
/// the remote must be listed before its output is trusted.
pub async fn resolve_remote(git: &Git<'_>, token: Option<&str>) -> Result<String> {
    if !git.remotes().await?.iter().any(|name| name == ORIGIN) {
        return Err(Error::RemoteNotFound);
    }

    let output = git.remote_show(ORIGIN).await?;
    let url = parse_fetch_url(&output).ok_or(Error::RemoteNotFound)?;
    tracing::debug!(url, "resolved origin fetch URL");
    Ok(authenticate(url, token))
}
