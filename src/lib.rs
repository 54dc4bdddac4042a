// ABOUTME: Library root for gh-pages-deploy - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod build;
pub mod config;
pub mod deploy;
pub mod diagnostics;
pub mod error;
pub mod exec;
pub mod git;
pub mod notify;
pub mod output;
pub mod publish;
pub mod remote;
pub mod types;
