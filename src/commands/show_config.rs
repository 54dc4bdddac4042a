// ABOUTME: Config command implementation.
// ABOUTME: Prints the merged .gh-pages settings and the deployment mode.

use gh_pages_deploy::config::{Config, Environment};
use gh_pages_deploy::error::{Error, Result};
use gh_pages_deploy::output::{Output, OutputMode};
use serde_json::json;
use std::path::Path;

pub fn show_config(working_dir: &Path, output: &Output) -> Result<()> {
    let config = Config::discover(working_dir)?;
    let env = Environment::from_env()?;
    let destination = env.destination();

    if output.mode() == OutputMode::Json {
        let value = json!({
            "config": config,
            "destination": destination.to_string(),
            "stagingPath": config.staging_path(working_dir).display().to_string(),
            "tokenPresent": env.token.is_some(),
        });
        let line =
            serde_json::to_string(&value).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        println!("{line}");
        return Ok(());
    }

    println!("Branch: {}", config.branch);
    println!("Build command: {}", config.build_command);
    println!(
        "Staging directory: {}",
        config.staging_path(working_dir).display()
    );
    println!("Commit message: {}", config.commit_message);
    println!("Destination: {}", destination);
    println!(
        "Token: {}",
        if env.token.is_some() { "present" } else { "absent" }
    );

    Ok(())
}
