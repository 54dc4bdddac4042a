// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};
use gh_pages_deploy::output::OutputMode;

#[derive(Parser)]
#[command(name = "gh-pages-deploy")]
#[command(about = "Build a static site and publish it to a GitHub Pages branch")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print the final result
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Print results as JSON lines
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the site and publish it (the default)
    Deploy,

    /// Create a starter .gh-pages configuration file
    Init {
        /// Command that builds the site into the staging directory
        #[arg(short, long)]
        build_command: Option<String>,

        /// Overwrite an existing .gh-pages file
        #[arg(short, long)]
        force: bool,
    },

    /// Show the effective configuration and deployment mode
    Config,
}
