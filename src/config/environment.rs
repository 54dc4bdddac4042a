// ABOUTME: Deployment settings taken from the process environment.
// ABOUTME: Resolved once at startup into an explicit struct passed to each step.

use std::fmt;

use crate::error::{Error, Result};
use crate::types::{Destination, PrId};

pub const PR_ID_VAR: &str = "GH_PAGES_PR_ID";
pub const COMMITTER_NAME_VAR: &str = "GH_PAGES_COMMITTER_NAME";
pub const COMMITTER_EMAIL_VAR: &str = "GH_PAGES_COMMITTER_EMAIL";
pub const TOKEN_VAR: &str = "GH_PAGES_TOKEN";
pub const FALLBACK_TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const PREVIEW_HOST_VAR: &str = "GH_PAGES_PREVIEW_HOST";
pub const API_URL_VAR: &str = "GH_PAGES_API_URL";
pub const REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Clone, PartialEq, Eq)]
pub struct Environment {
    pub pr_id: Option<PrId>,
    pub committer_name: Option<String>,
    pub committer_email: Option<String>,
    pub token: Option<String>,
    pub preview_host: Option<String>,
    pub api_url: String,
    /// Raw `<owner>/<repo>` value; parsed only when a notification is sent.
    pub repository: Option<String>,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            pr_id: None,
            committer_name: None,
            committer_email: None,
            token: None,
            preview_host: None,
            api_url: DEFAULT_API_URL.to_string(),
            repository: None,
        }
    }
}

impl Environment {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let pr_id = get(PR_ID_VAR)
            .map(|raw| PrId::new(&raw))
            .transpose()
            .map_err(|e| Error::InvalidEnv {
                var: PR_ID_VAR,
                reason: e.to_string(),
            })?;

        Ok(Self {
            pr_id,
            committer_name: get(COMMITTER_NAME_VAR),
            committer_email: get(COMMITTER_EMAIL_VAR),
            token: get(TOKEN_VAR).or_else(|| get(FALLBACK_TOKEN_VAR)),
            preview_host: get(PREVIEW_HOST_VAR),
            api_url: get(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            repository: get(REPOSITORY_VAR),
        })
    }

    pub fn destination(&self) -> Destination {
        Destination::for_pr(self.pr_id.as_ref())
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("pr_id", &self.pr_id)
            .field("committer_name", &self.committer_name)
            .field("committer_email", &self.committer_email)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("preview_host", &self.preview_host)
            .field("api_url", &self.api_url)
            .field("repository", &self.repository)
            .finish()
    }
}
