// ABOUTME: Where build output lands inside the hosting branch.
// ABOUTME: Either the branch root or a pull request preview subdirectory.

use std::fmt;
use std::path::{Path, PathBuf};

use super::PrId;
use crate::publish::PREVIEW_DIR;

/// Placement of build output within the hosting branch checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// The whole branch is replaced by the build output.
    Root,
    /// Output goes to `pr/<id>`; the rest of the branch is preserved.
    Preview(PrId),
}

impl Destination {
    pub fn for_pr(pr_id: Option<&PrId>) -> Self {
        match pr_id {
            Some(id) => Destination::Preview(id.clone()),
            None => Destination::Root,
        }
    }

    /// Path relative to the branch root (empty for `Root`).
    pub fn relative_path(&self) -> PathBuf {
        match self {
            Destination::Root => PathBuf::new(),
            Destination::Preview(id) => Path::new(PREVIEW_DIR).join(id.as_str()),
        }
    }

    /// Destination inside a checkout of the branch.
    pub fn within(&self, checkout: &Path) -> PathBuf {
        match self {
            Destination::Root => checkout.to_path_buf(),
            Destination::Preview(_) => checkout.join(self.relative_path()),
        }
    }

    pub fn pr_id(&self) -> Option<&PrId> {
        match self {
            Destination::Root => None,
            Destination::Preview(id) => Some(id),
        }
    }

    pub fn is_preview(&self) -> bool {
        matches!(self, Destination::Preview(_))
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Root => write!(f, "branch root"),
            Destination::Preview(id) => write!(f, "pr/{id}"),
        }
    }
}
