// ABOUTME: State transition methods for deployment orchestration.
// ABOUTME: Each method consumes self and returns the next state on success.

use crate::build;
use crate::error::Result;
use crate::exec::{CommandOutput, CommandRunner};
use crate::git::Git;
use crate::publish::files::{clear_dir_contents, copy_dir_contents, remove_path};
use crate::publish::{CommitOutcome, PREVIEW_DIR, resolve_commit_message};
use crate::remote;

use super::Deployment;
use super::state::{Built, Cloned, Committed, Completed, Initialized, Resolved, Staged, Synced};

/// Result of attempting the deployment commit.
#[derive(Debug)]
pub enum CommitResult {
    /// A commit was created; push it.
    Committed(Deployment<Committed>),
    /// Nothing changed since the last deployment.
    NothingToCommit(Deployment<Staged>),
    /// git's response fit neither case. `output` holds what it printed.
    Unrecognized {
        deployment: Deployment<Staged>,
        output: CommandOutput,
    },
}

impl CommitResult {
    pub fn outcome(&self) -> CommitOutcome {
        match self {
            CommitResult::Committed(_) => CommitOutcome::Committed,
            CommitResult::NothingToCommit(_) => CommitOutcome::NothingToCommit,
            CommitResult::Unrecognized { .. } => CommitOutcome::Unrecognized,
        }
    }
}

impl Deployment<Initialized> {
    /// Read origin's fetch URL, injecting the token when one is configured.
    pub async fn resolve_remote(self, runner: &dyn CommandRunner) -> Result<Deployment<Resolved>> {
        let git = Git::new(runner, &self.working_dir);
        let remote = remote::resolve_remote(&git, self.env.token.as_deref()).await?;
        Ok(self.transition(Resolved { remote }))
    }
}

impl Deployment<Resolved> {
    /// Run the build command into a freshly cleared staging directory.
    pub async fn build(self, runner: &dyn CommandRunner) -> Result<Deployment<Built>> {
        let staging = build::build(runner, &self.config, &self.working_dir).await?;
        let remote = self.state.remote.clone();
        Ok(self.transition(Built { remote, staging }))
    }
}

impl Deployment<Built> {
    /// Replace any previous checkout with a fresh clone of the hosting branch.
    pub async fn clone_branch(self, runner: &dyn CommandRunner) -> Result<Deployment<Cloned>> {
        let checkout = self.checkout_path();
        remove_path(&checkout)?;

        let git = Git::new(runner, &self.working_dir);
        git.clone_branch(&self.state.remote, &self.config.branch, &checkout)
            .await?;

        let staging = self.state.staging.clone();
        Ok(self.transition(Cloned { staging, checkout }))
    }
}

impl Deployment<Cloned> {
    /// Clear the destination, copy the build output into it, and remove the
    /// staging directory. Previews only clear their own `pr/<id>` directory.
    pub fn sync_output(self) -> Result<Deployment<Synced>> {
        let target = self.destination.within(&self.state.checkout);

        clear_dir_contents(&target)?;
        let copied = copy_dir_contents(&self.state.staging, &target)?;
        tracing::info!(files = copied, target = %target.display(), "copied build output");

        remove_path(&self.state.staging)?;

        let checkout = self.state.checkout.clone();
        Ok(self.transition(Synced { checkout }))
    }
}

impl Deployment<Synced> {
    /// Configure the committer, stage everything, and keep a root deploy
    /// from touching existing previews.
    pub async fn stage(self, runner: &dyn CommandRunner) -> Result<Deployment<Staged>> {
        let git = Git::new(runner, &self.state.checkout);

        if let Some(ref name) = self.env.committer_name {
            git.config_local("user.name", name).await?;
        }
        if let Some(ref email) = self.env.committer_email {
            git.config_local("user.email", email).await?;
        }

        git.add_all().await?;

        if !self.destination.is_preview() {
            let prefix = format!("{PREVIEW_DIR}/");
            let touched = git
                .staged_paths()
                .await?
                .into_iter()
                .filter(|p| p.starts_with(&prefix))
                .count();
            if touched > 0 {
                tracing::info!(paths = touched, "restoring preview deployments");
                git.restore_from_head(PREVIEW_DIR).await?;
            }
        }

        let checkout = self.state.checkout.clone();
        Ok(self.transition(Staged { checkout }))
    }
}

impl Deployment<Staged> {
    /// The commit message with the `#PR` placeholder resolved.
    pub fn commit_message(&self) -> String {
        resolve_commit_message(&self.config.commit_message, &self.destination)
    }

    /// Commit the staged changes. A clean index short-circuits to
    /// `NothingToCommit` without running `git commit`.
    pub async fn commit(self, runner: &dyn CommandRunner) -> Result<CommitResult> {
        let git = Git::new(runner, &self.state.checkout);

        if !git.has_staged_changes().await? {
            return Ok(CommitResult::NothingToCommit(self));
        }

        let output = git.commit(&self.commit_message()).await?;
        let result = match CommitOutcome::classify(&output) {
            CommitOutcome::Committed => {
                let checkout = self.state.checkout.clone();
                CommitResult::Committed(self.transition(Committed { checkout }))
            }
            CommitOutcome::NothingToCommit => CommitResult::NothingToCommit(self),
            CommitOutcome::Unrecognized => CommitResult::Unrecognized {
                deployment: self,
                output,
            },
        };
        Ok(result)
    }

    /// Remove the checkout without pushing.
    pub fn discard_checkout(self) -> Result<()> {
        remove_path(&self.state.checkout)?;
        Ok(())
    }
}

impl Deployment<Committed> {
    /// Push the hosting branch to origin, then remove the checkout.
    pub async fn push(self, runner: &dyn CommandRunner) -> Result<Deployment<Completed>> {
        let git = Git::new(runner, &self.state.checkout);
        git.push(remote::ORIGIN, &self.config.branch).await?;

        remove_path(&self.state.checkout)?;
        Ok(self.transition(Completed))
    }
}
