// ABOUTME: Thin typed wrapper over the git command line.
// ABOUTME: Every git invocation the deployment needs, scoped to one working directory.

use std::path::Path;

use crate::exec::{CommandError, CommandOutput, CommandRunner, CommandSpec};

/// Git commands run in a fixed directory.
pub struct Git<'a> {
    runner: &'a dyn CommandRunner,
    dir: &'a Path,
}

impl<'a> Git<'a> {
    pub fn new(runner: &'a dyn CommandRunner, dir: &'a Path) -> Self {
        Self { runner, dir }
    }

    fn git(&self) -> CommandSpec {
        CommandSpec::new("git", self.dir)
    }

    /// Names of the configured remotes.
    pub async fn remotes(&self) -> Result<Vec<String>, CommandError> {
        let spec = self.git().arg("remote");
        let output = self.runner.run_checked(&spec).await?;
        Ok(output
            .stdout
            .lines()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// `git remote show -n <name>`, without contacting the remote.
    pub async fn remote_show(&self, name: &str) -> Result<String, CommandError> {
        let spec = self.git().args(["remote", "show", "-n", name]);
        Ok(self.runner.run_checked(&spec).await?.stdout)
    }

    /// Clone a single branch of `remote` into `target`.
    pub async fn clone_branch(
        &self,
        remote: &str,
        branch: &str,
        target: &Path,
    ) -> Result<(), CommandError> {
        let spec = self
            .git()
            .args(["clone", "-b", branch, remote])
            .arg(target.to_string_lossy());
        self.runner.run_checked(&spec).await?;
        Ok(())
    }

    /// Set a config value in this repository only.
    pub async fn config_local(&self, key: &str, value: &str) -> Result<(), CommandError> {
        let spec = self.git().args(["config", "--local", key, value]);
        self.runner.run_checked(&spec).await?;
        Ok(())
    }

    pub async fn add_all(&self) -> Result<(), CommandError> {
        let spec = self.git().args(["add", "--all", "."]);
        self.runner.run_checked(&spec).await?;
        Ok(())
    }

    /// Paths with staged changes, relative to the repository root.
    pub async fn staged_paths(&self) -> Result<Vec<String>, CommandError> {
        let spec = self.git().args(["diff", "--cached", "--name-only", "-z"]);
        let output = self.runner.run_checked(&spec).await?;
        Ok(output
            .stdout
            .split('\0')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Reset `path` in both index and worktree to its state at HEAD.
    /// Files under `path` that HEAD does not contain are removed.
    pub async fn restore_from_head(&self, path: &str) -> Result<(), CommandError> {
        let spec = self
            .git()
            .args(["restore", "--source=HEAD", "--staged", "--worktree", "--", path]);
        self.runner.run_checked(&spec).await?;
        Ok(())
    }

    /// Whether the index differs from HEAD.
    pub async fn has_staged_changes(&self) -> Result<bool, CommandError> {
        let spec = self.git().args(["diff", "--cached", "--quiet"]);
        let output = self.runner.run(&spec).await?;
        match output.exit_code {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => output.check(&spec).map(|_| true),
        }
    }

    /// Commit the index. The raw output is returned unchecked so the caller
    /// can classify it.
    pub async fn commit(&self, message: &str) -> Result<CommandOutput, CommandError> {
        let spec = self.git().args(["commit", "-m", message]);
        self.runner.run(&spec).await
    }

    pub async fn push(&self, remote: &str, branch: &str) -> Result<(), CommandError> {
        let spec = self.git().args(["push", remote, branch]);
        self.runner.run_checked(&spec).await?;
        Ok(())
    }
}
