// ABOUTME: Command module aggregator for the gh-pages-deploy CLI.
// ABOUTME: Re-exports deploy and config command handlers.

mod deploy;
mod show_config;

pub use deploy::deploy;
pub use show_config::show_config;
