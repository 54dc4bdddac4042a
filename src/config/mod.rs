// ABOUTME: Configuration types and parsing for the .gh-pages file.
// ABOUTME: Handles JSON parsing, shallow merging over defaults, and field validation.

mod environment;
mod init;

pub use environment::{
    API_URL_VAR, COMMITTER_EMAIL_VAR, COMMITTER_NAME_VAR, DEFAULT_API_URL, Environment,
    FALLBACK_TOKEN_VAR, PR_ID_VAR, PREVIEW_HOST_VAR, REPOSITORY_VAR, TOKEN_VAR,
};
pub use init::init_config;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Component, Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".gh-pages";

pub const DEFAULT_COMMIT_MESSAGE: &str = "Deploy to GitHub Pages.";
pub const DEFAULT_BRANCH: &str = "gh-pages";
pub const DEFAULT_STAGING_DIRECTORY: &str = "gh-pages-staging";

/// Minimal configuration shown to users whose config is missing or invalid.
pub const EXAMPLE_CONFIG: &str = r#"{
  "buildCommand": "yarn build-pages-app"
}"#;

/// Fields that must be strings once defaults are applied, in reporting order.
const STRING_FIELDS: [&str; 4] = ["commitMessage", "branch", "stagingDirectory", "buildCommand"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub commit_message: String,
    pub branch: String,
    pub staging_directory: String,
    pub build_command: String,
}

fn defaults() -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("commitMessage".into(), DEFAULT_COMMIT_MESSAGE.into());
    map.insert("branch".into(), DEFAULT_BRANCH.into());
    map.insert("stagingDirectory".into(), DEFAULT_STAGING_DIRECTORY.into());
    map
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(Error::InvalidJson)?;
        Self::from_value(value)
    }

    /// Shallow-merge a parsed document over the defaults and validate it.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(user) = value else {
            return Err(Error::InvalidConfig(
                "expected a JSON object at the top level".to_string(),
            ));
        };

        let mut merged = defaults();
        merged.extend(user);

        for field in STRING_FIELDS {
            if !merged.get(field).is_some_and(Value::is_string) {
                return Err(Error::InvalidField(field));
            }
        }

        let config: Config = serde_json::from_value(Value::Object(merged))
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if !path.is_file() {
            return Err(Error::ConfigNotFound(dir.to_path_buf()));
        }
        Self::load(&path)
    }

    /// The staging directory as an absolute path.
    pub fn staging_path(&self, working_dir: &Path) -> PathBuf {
        let staging = Path::new(&self.staging_directory);
        if staging.is_absolute() {
            staging.to_path_buf()
        } else {
            working_dir.join(staging)
        }
    }

    /// The directory the hosting branch is cloned into.
    pub fn clone_path(&self, working_dir: &Path) -> PathBuf {
        working_dir.join(&self.branch)
    }

    fn validate(&self) -> Result<()> {
        if self.build_command.trim().is_empty() {
            return Err(Error::InvalidConfig("buildCommand cannot be empty".to_string()));
        }

        let branch = Path::new(&self.branch);
        let branch_ok = !self.branch.trim().is_empty()
            && !self.branch.starts_with('-')
            && branch
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !branch_ok {
            return Err(Error::InvalidConfig(format!(
                "branch '{}' is not a usable branch name",
                self.branch
            )));
        }

        let staging = Path::new(&self.staging_directory);
        let staging_ok = staging
            .components()
            .any(|c| matches!(c, Component::Normal(_)))
            && !staging.components().any(|c| c == Component::ParentDir);
        if !staging_ok {
            return Err(Error::InvalidConfig(format!(
                "stagingDirectory '{}' must name a directory",
                self.staging_directory
            )));
        }

        // The branch checkout is deleted and recreated next to the staging dir.
        if !staging.is_absolute() && (staging.starts_with(branch) || branch.starts_with(staging))
        {
            return Err(Error::InvalidConfig(format!(
                "stagingDirectory '{}' overlaps the '{}' checkout",
                self.staging_directory, self.branch
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let config = Config::from_json(r#"{"buildCommand":"echo ok"}"#).unwrap();
        assert_eq!(config.branch, "gh-pages");
        assert_eq!(config.staging_directory, "gh-pages-staging");
        assert_eq!(config.commit_message, "Deploy to GitHub Pages.");
        assert_eq!(config.build_command, "echo ok");
    }

    #[test]
    fn fields_are_checked_in_order() {
        let err = Config::from_json(r#"{"branch": 1, "commitMessage": false}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidField("commitMessage")));
    }

    #[test]
    fn blank_build_command_is_rejected() {
        let err = Config::from_json(r#"{"buildCommand":"   "}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert!(err.to_string().contains("buildCommand cannot be empty"));
    }

    #[test]
    fn relative_staging_is_joined_to_working_dir() {
        let config = Config::from_json(r#"{"buildCommand":"x","stagingDirectory":"out"}"#).unwrap();
        assert_eq!(
            config.staging_path(Path::new("/work")),
            PathBuf::from("/work/out")
        );
    }

    #[test]
    fn absolute_staging_is_kept() {
        let config =
            Config::from_json(r#"{"buildCommand":"x","stagingDirectory":"/tmp/out"}"#).unwrap();
        assert_eq!(
            config.staging_path(Path::new("/work")),
            PathBuf::from("/tmp/out")
        );
    }

    #[test]
    fn branch_cannot_escape_working_dir() {
        for branch in ["", "..", ".", "../pages", "/abs", "-b"] {
            let json = serde_json::json!({"buildCommand": "x", "branch": branch}).to_string();
            let err = Config::from_json(&json).unwrap_err();
            assert!(
                matches!(err, Error::InvalidConfig(_)),
                "branch {branch:?} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn staging_cannot_be_working_dir() {
        for staging in ["", ".", "./", "../elsewhere"] {
            let json =
                serde_json::json!({"buildCommand": "x", "stagingDirectory": staging}).to_string();
            assert!(Config::from_json(&json).is_err(), "{staging:?} accepted");
        }
    }

    #[test]
    fn staging_cannot_overlap_branch_checkout() {
        let err = Config::from_json(r#"{"buildCommand":"x","stagingDirectory":"gh-pages/out"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("overlaps"));

        let config =
            Config::from_json(r#"{"buildCommand":"x","stagingDirectory":"gh-pages-out"}"#);
        assert!(config.is_ok());
    }

    #[test]
    fn nested_branch_names_are_allowed() {
        let config =
            Config::from_json(r#"{"buildCommand":"x","branch":"release/pages"}"#).unwrap();
        assert_eq!(
            config.clone_path(Path::new("/work")),
            PathBuf::from("/work/release/pages")
        );
    }
}
