// ABOUTME: Config scaffolding for new projects.
// ABOUTME: Creates a .gh-pages file with the defaults spelled out.

use std::path::Path;

use crate::error::{Error, Result};

use super::{
    CONFIG_FILENAME, Config, DEFAULT_BRANCH, DEFAULT_COMMIT_MESSAGE, DEFAULT_STAGING_DIRECTORY,
};

pub const DEFAULT_BUILD_COMMAND: &str = "yarn build-pages-app";

pub fn init_config(dir: &Path, build_command: Option<&str>, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    let config = Config {
        commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
        branch: DEFAULT_BRANCH.to_string(),
        staging_directory: DEFAULT_STAGING_DIRECTORY.to_string(),
        build_command: build_command.unwrap_or(DEFAULT_BUILD_COMMAND).to_string(),
    };

    let mut json = serde_json::to_string_pretty(&config)
        .map_err(|e| Error::InvalidConfig(e.to_string()))?;
    json.push('\n');
    std::fs::write(&config_path, json)?;

    tracing::info!("wrote {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn written_template_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        init_config(dir.path(), Some("npm run build"), false).unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.build_command, "npm run build");
        assert_eq!(config.branch, DEFAULT_BRANCH);
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        init_config(dir.path(), None, false).unwrap();

        let err = init_config(dir.path(), None, false).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists(_)));

        init_config(dir.path(), Some("make site"), true).unwrap();
        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.build_command, "make site");
    }
}
