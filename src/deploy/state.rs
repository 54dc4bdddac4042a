// ABOUTME: Deployment state marker types for the type state pattern.
// ABOUTME: Each state carries the data produced by the step that reached it.

use std::path::PathBuf;

/// Initial state: configuration and environment loaded.
/// Available actions: `resolve_remote()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Initialized;

/// Remote resolved: the authenticated clone URL is known.
/// Available actions: `build()`
#[derive(Debug, Clone)]
pub struct Resolved {
    pub(crate) remote: String,
}

/// Built: the build command populated the staging directory.
/// Available actions: `clone_branch()`
#[derive(Debug, Clone)]
pub struct Built {
    pub(crate) remote: String,
    pub(crate) staging: PathBuf,
}

/// Cloned: a fresh checkout of the hosting branch exists.
/// Available actions: `sync_output()`
#[derive(Debug, Clone)]
pub struct Cloned {
    pub(crate) staging: PathBuf,
    pub(crate) checkout: PathBuf,
}

/// Synced: build output copied into the destination, staging removed.
/// Available actions: `stage()`
#[derive(Debug, Clone)]
pub struct Synced {
    pub(crate) checkout: PathBuf,
}

/// Staged: all changes are in the index.
/// Available actions: `commit()`, `discard_checkout()`
#[derive(Debug, Clone)]
pub struct Staged {
    pub(crate) checkout: PathBuf,
}

/// Committed: a deployment commit exists locally.
/// Available actions: `push()`
#[derive(Debug, Clone)]
pub struct Committed {
    pub(crate) checkout: PathBuf,
}

/// Completed: pushed and the checkout removed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Completed;
