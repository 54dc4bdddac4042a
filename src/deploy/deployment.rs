// ABOUTME: Generic deployment struct parameterized by state marker.
// ABOUTME: Holds the configuration and environment every step reads.

use std::path::{Path, PathBuf};

use crate::config::{Config, Environment};
use crate::types::Destination;

use super::state::{Built, Cloned, Committed, Initialized, Resolved, Staged, Synced};

/// A deployment in progress, parameterized by its current state.
///
/// Steps consume the deployment and return it in the next state, so the
/// pipeline can only run in order: resolve, build, clone, sync, stage,
/// commit, push.
#[derive(Debug)]
pub struct Deployment<S> {
    pub(crate) config: Config,
    pub(crate) env: Environment,
    pub(crate) working_dir: PathBuf,
    pub(crate) destination: Destination,
    pub(crate) state: S,
}

impl Deployment<Initialized> {
    /// `working_dir` should be absolute; every path is derived from it.
    pub fn new(config: Config, env: Environment, working_dir: impl Into<PathBuf>) -> Self {
        let destination = env.destination();
        Deployment {
            config,
            env,
            working_dir: working_dir.into(),
            destination,
            state: Initialized,
        }
    }
}

impl<S> Deployment<S> {
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Where the hosting branch is (or will be) checked out.
    pub fn checkout_path(&self) -> PathBuf {
        self.config.clone_path(&self.working_dir)
    }

    pub(crate) fn transition<T>(self, state: T) -> Deployment<T> {
        Deployment {
            config: self.config,
            env: self.env,
            working_dir: self.working_dir,
            destination: self.destination,
            state,
        }
    }
}

impl Deployment<Resolved> {
    /// The remote URL, possibly carrying credentials.
    pub fn remote(&self) -> &str {
        &self.state.remote
    }
}

impl Deployment<Built> {
    pub fn staging(&self) -> &Path {
        &self.state.staging
    }
}

impl Deployment<Cloned> {
    pub fn staging(&self) -> &Path {
        &self.state.staging
    }

    pub fn checkout(&self) -> &Path {
        &self.state.checkout
    }
}

impl Deployment<Synced> {
    pub fn checkout(&self) -> &Path {
        &self.state.checkout
    }
}

impl Deployment<Staged> {
    pub fn checkout(&self) -> &Path {
        &self.state.checkout
    }
}

impl Deployment<Committed> {
    pub fn checkout(&self) -> &Path {
        &self.state.checkout
    }
}
