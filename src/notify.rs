// ABOUTME: Pull request preview notifications via the GitHub issues API.
// ABOUTME: Posts a comment with the preview link from a background task.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::config::Environment;
use crate::diagnostics::{Diagnostics, Warning};
use crate::types::{PrId, RepoSlug};

/// Upper bound on how long the binary waits for the comment before exiting.
pub const WAIT_TIMEOUT: Duration = Duration::from_secs(10);

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Errors from posting a notification.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("token contains characters not allowed in a header")]
    InvalidToken,
}

#[derive(Serialize)]
struct CommentRequest<'a> {
    body: &'a str,
}

/// Minimal GitHub REST client for issue comments.
pub struct Client {
    http: reqwest::Client,
    api_url: String,
}

impl Client {
    pub fn new(api_url: &str, token: &str) -> Result<Self, NotifyError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| NotifyError::InvalidToken)?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("gh-pages-deploy/", env!("CARGO_PKG_VERSION"))),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            api_url: with_scheme(api_url).trim_end_matches('/').to_string(),
        })
    }

    /// Comment on the pull request (issues and PRs share numbering).
    pub async fn post_comment(
        &self,
        slug: &RepoSlug,
        pr_id: &PrId,
        body: &str,
    ) -> Result<(), NotifyError> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.api_url,
            slug.owner(),
            slug.repo(),
            pr_id
        );
        let resp = self
            .http
            .post(&url)
            .json(&CommentRequest { body })
            .send()
            .await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(NotifyError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

fn with_scheme(host: &str) -> String {
    if host.contains("://") {
        host.to_string()
    } else {
        format!("https://{host}")
    }
}

/// `https://<host>/<owner>/<repo>/pr/<id>`
pub fn preview_url(host: &str, slug: &RepoSlug, pr_id: &PrId) -> String {
    format!(
        "{}/{}/{}/pr/{}",
        with_scheme(host).trim_end_matches('/'),
        slug.owner(),
        slug.repo(),
        pr_id
    )
}

pub fn comment_body(preview_url: &str) -> String {
    format!("Preview deployment is ready: {preview_url}")
}

/// A preview comment ready to be posted.
pub struct PreviewNotification {
    pub slug: RepoSlug,
    pub pr_id: PrId,
    pub preview_url: String,
    api_url: String,
    token: String,
}

impl PreviewNotification {
    /// Decide whether a notification applies to this run.
    ///
    /// Returns `None` outside PR mode or when no preview host is configured.
    /// A missing repository or token is recorded as a warning and also
    /// yields `None`.
    pub fn prepare(env: &Environment, diag: &mut Diagnostics) -> Option<Self> {
        let pr_id = env.pr_id.clone()?;
        let Some(ref host) = env.preview_host else {
            tracing::debug!("no preview host configured, skipping PR notification");
            return None;
        };

        let slug = match RepoSlug::from_optional(env.repository.as_deref()) {
            Ok(slug) => slug,
            Err(e) => {
                diag.warn(Warning::notification_skipped(format!(
                    "skipping PR notification: {e}"
                )));
                return None;
            }
        };

        let Some(ref token) = env.token else {
            diag.warn(Warning::notification_skipped(
                "skipping PR notification: no access token available",
            ));
            return None;
        };

        Some(Self {
            preview_url: preview_url(host, &slug, &pr_id),
            slug,
            pr_id,
            api_url: env.api_url.clone(),
            token: token.clone(),
        })
    }

    pub async fn send(&self) -> Result<(), NotifyError> {
        let client = Client::new(&self.api_url, &self.token)?;
        client
            .post_comment(&self.slug, &self.pr_id, &comment_body(&self.preview_url))
            .await
    }
}

/// Post the comment in the background. Failures are logged, never returned.
pub fn spawn(notification: PreviewNotification) -> JoinHandle<()> {
    tokio::spawn(async move {
        match notification.send().await {
            Ok(()) => tracing::info!(
                pr = %notification.pr_id,
                url = %notification.preview_url,
                "posted preview comment"
            ),
            Err(e) => tracing::warn!(
                "failed to post preview comment on PR #{}: {}",
                notification.pr_id,
                e
            ),
        }
    })
}

/// Give a spawned notification up to `timeout` to finish.
pub async fn wait(handle: JoinHandle<()>, timeout: Duration) {
    match tokio::time::timeout(timeout, handle).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::warn!("preview notification task failed: {}", e),
        Err(_) => tracing::warn!("preview notification did not finish within {:?}", timeout),
    }
}
