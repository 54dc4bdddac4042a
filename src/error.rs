// ABOUTME: Application-wide error types for gh-pages-deploy.
// ABOUTME: Uses thiserror for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

use crate::exec::CommandError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("No .gh-pages config file found in {0}.")]
    ConfigNotFound(PathBuf),

    #[error("invalid JSON in .gh-pages: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("{0} must be a string.")]
    InvalidField(&'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid environment variable {var}: {reason}")]
    InvalidEnv { var: &'static str, reason: String },

    #[error("no 'Fetch URL:' line found for remote 'origin'")]
    RemoteNotFound,

    #[error("build command did not create the staging directory {0}")]
    StagingMissing(PathBuf),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error stems from the user's configuration rather than a
    /// failed step. Configuration errors are reported with an example config.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Error::ConfigNotFound(_)
                | Error::InvalidJson(_)
                | Error::InvalidField(_)
                | Error::InvalidConfig(_)
                | Error::InvalidEnv { .. }
        )
    }

    /// Whether the `.gh-pages` file itself is missing or wrong, so an example
    /// config helps.
    pub fn needs_example_config(&self) -> bool {
        matches!(
            self,
            Error::ConfigNotFound(_)
                | Error::InvalidJson(_)
                | Error::InvalidField(_)
                | Error::InvalidConfig(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
