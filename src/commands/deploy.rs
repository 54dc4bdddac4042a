// ABOUTME: Deploy command implementation.
// ABOUTME: Loads configuration, runs the pipeline, and sends the PR notification.

use gh_pages_deploy::config::{Config, Environment};
use gh_pages_deploy::deploy::{self, DeployOutcome};
use gh_pages_deploy::diagnostics::Diagnostics;
use gh_pages_deploy::error::Result;
use gh_pages_deploy::exec::SystemRunner;
use gh_pages_deploy::notify::{self, PreviewNotification};
use gh_pages_deploy::output::Output;
use std::path::Path;

/// Build and publish the site from `working_dir`.
pub async fn deploy(working_dir: &Path, output: &mut Output) -> Result<()> {
    // Both are validated before anything touches the filesystem
    let config = Config::discover(working_dir)?;
    let env = Environment::from_env()?;

    output.start_timer();
    let runner = SystemRunner::new(output.echoes_commands());
    let mut diag = Diagnostics::default();

    output.progress(&format!(
        "Deploying to {} ({})",
        config.branch,
        env.destination()
    ));

    let report = deploy::run(&config, &env, working_dir, &runner, output, &mut diag).await?;

    let notification = match report.outcome {
        DeployOutcome::Published => PreviewNotification::prepare(&env, &mut diag),
        DeployOutcome::Unchanged | DeployOutcome::Skipped => None,
    };
    if let Some(ref n) = notification {
        output.progress(&format!("  → Preview: {}", n.preview_url));
    }
    let pending = notification.map(notify::spawn);

    for warning in diag.warnings() {
        output.warning(&warning.message);
    }

    match report.outcome {
        DeployOutcome::Published => output.success("GitHub pages deployment success!"),
        DeployOutcome::Unchanged => {
            output.success("Build artifacts unchanged, nothing to deploy.")
        }
        DeployOutcome::Skipped => output.warning("Deployment skipped, nothing was pushed."),
    }

    if let Some(handle) = pending {
        notify::wait(handle, notify::WAIT_TIMEOUT).await;
    }

    Ok(())
}
