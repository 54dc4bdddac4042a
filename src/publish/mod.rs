// ABOUTME: Building blocks for publishing output into the hosting branch.
// ABOUTME: File sync helpers, commit message templating, and commit outcome classification.

pub mod files;
mod message;
mod outcome;

pub use message::{PR_PLACEHOLDER, resolve_commit_message};
pub use outcome::CommitOutcome;

/// Directory in the hosting branch holding pull request previews.
pub const PREVIEW_DIR: &str = "pr";
