// ABOUTME: Deployment orchestration using the type state pattern.
// ABOUTME: Runs resolve, build, clone, sync, stage, commit and push in order.

mod deployment;
mod state;
mod transitions;

pub use deployment::Deployment;
pub use state::{Built, Cloned, Committed, Completed, Initialized, Resolved, Staged, Synced};
pub use transitions::CommitResult;

use std::path::Path;

use crate::config::{Config, Environment};
use crate::diagnostics::{Diagnostics, Warning};
use crate::error::Result;
use crate::exec::CommandRunner;
use crate::output::Output;
use crate::types::Destination;

/// How a deployment run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployOutcome {
    /// Changes were committed and pushed.
    Published,
    /// Build output matched the branch; nothing was pushed.
    Unchanged,
    /// The commit result was not understood; nothing was pushed and the
    /// checkout was kept for inspection.
    Skipped,
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployReport {
    pub outcome: DeployOutcome,
    pub destination: Destination,
    pub branch: String,
}

/// Run the whole pipeline against `working_dir`.
pub async fn run(
    config: &Config,
    env: &Environment,
    working_dir: &Path,
    runner: &dyn CommandRunner,
    output: &Output,
    diag: &mut Diagnostics,
) -> Result<DeployReport> {
    let deployment = Deployment::new(config.clone(), env.clone(), working_dir);
    let destination = deployment.destination().clone();

    output.progress("  → Resolving origin remote...");
    let deployment = deployment.resolve_remote(runner).await?;

    output.progress("  → Building site...");
    let deployment = deployment.build(runner).await?;

    output.progress(&format!("  → Cloning branch {}...", config.branch));
    let deployment = deployment.clone_branch(runner).await?;

    output.progress(&format!("  → Copying build output to {}...", destination));
    let deployment = deployment.sync_output()?;

    output.progress("  → Staging changes...");
    let deployment = deployment.stage(runner).await?;

    output.progress("  → Committing...");
    let outcome = match deployment.commit(runner).await? {
        CommitResult::Committed(deployment) => {
            output.progress(&format!("  → Pushing {}...", config.branch));
            deployment.push(runner).await?;
            DeployOutcome::Published
        }
        CommitResult::NothingToCommit(deployment) => {
            deployment.discard_checkout()?;
            DeployOutcome::Unchanged
        }
        CommitResult::Unrecognized {
            deployment,
            output: commit_output,
        } => {
            let response = format!("{}{}", commit_output.stdout, commit_output.stderr);
            diag.warn(Warning::unrecognized_commit(format!(
                "unrecognized git commit response, nothing was pushed (checkout kept at {}): {}",
                deployment.checkout().display(),
                response.trim()
            )));
            DeployOutcome::Skipped
        }
    };

    Ok(DeployReport {
        outcome,
        destination,
        branch: config.branch.clone(),
    })
}
