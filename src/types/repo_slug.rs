// ABOUTME: Owner/repository slug parsing for hosting provider APIs.
// ABOUTME: Parses the "<owner>/<repo>" form used by CI environments.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepoSlugError {
    #[error("repository is not set")]
    Missing,

    #[error("repository '{0}' is not in <owner>/<repo> form")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSlug {
    owner: String,
    repo: String,
}

impl RepoSlug {
    pub fn parse(value: &str) -> Result<Self, RepoSlugError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(RepoSlugError::Missing);
        }

        let malformed = || RepoSlugError::Malformed(trimmed.to_string());
        let (owner, repo) = trimmed.split_once('/').ok_or_else(malformed)?;

        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return Err(malformed());
        }

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    /// Parse an optional value, treating absence as `Missing`.
    pub fn from_optional(value: Option<&str>) -> Result<Self, RepoSlugError> {
        value.map_or(Err(RepoSlugError::Missing), Self::parse)
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_owner_and_repo() {
        let slug = RepoSlug::parse("octo-org/site").unwrap();
        assert_eq!(slug.owner(), "octo-org");
        assert_eq!(slug.repo(), "site");
        assert_eq!(slug.to_string(), "octo-org/site");
    }

    #[test]
    fn missing_is_named() {
        assert_eq!(RepoSlug::from_optional(None), Err(RepoSlugError::Missing));
        assert_eq!(RepoSlug::parse(""), Err(RepoSlugError::Missing));
    }

    #[test]
    fn rejects_malformed() {
        for value in ["no-slash", "/repo", "owner/", "a/b/c"] {
            assert!(
                matches!(RepoSlug::parse(value), Err(RepoSlugError::Malformed(_))),
                "expected {value} to be rejected"
            );
        }
    }
}
