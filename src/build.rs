// ABOUTME: Runs the user's build command to produce the staging directory.
// ABOUTME: Clears stale output first and fails the run on a non-zero exit.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::exec::{CommandRunner, CommandSpec};
use crate::publish::files::remove_path;

/// Build the site and return the absolute staging directory it produced.
pub async fn build(
    runner: &dyn CommandRunner,
    config: &Config,
    working_dir: &Path,
) -> Result<PathBuf> {
    let staging = config.staging_path(working_dir);
    remove_path(&staging)?;

    tracing::info!(command = %config.build_command, "running build command");
    let spec = CommandSpec::shell(&config.build_command, working_dir).streaming();
    runner.run_checked(&spec).await?;

    if !staging.is_dir() {
        return Err(Error::StagingMissing(staging));
    }

    Ok(staging)
}
