// ABOUTME: Entry point for the gh-pages-deploy CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use gh_pages_deploy::config::{self, EXAMPLE_CONFIG};
use gh_pages_deploy::error::Result;
use gh_pages_deploy::output::Output;
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbose flag
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mut output = Output::new(cli.output_mode());

    if let Err(e) = run(cli, &mut output).await {
        output.error(&e.to_string());
        if e.needs_example_config() {
            eprintln!("You need to at least specify a build command, e.g.");
            eprintln!("{EXAMPLE_CONFIG}");
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli, output: &mut Output) -> Result<()> {
    let cwd = env::current_dir()?;

    match cli.command.unwrap_or(Commands::Deploy) {
        Commands::Deploy => commands::deploy(&cwd, output).await,
        Commands::Init {
            build_command,
            force,
        } => {
            config::init_config(&cwd, build_command.as_deref(), force)?;
            output.success(&format!("Created {}", config::CONFIG_FILENAME));
            Ok(())
        }
        Commands::Config => commands::show_config(&cwd, output),
    }
}
