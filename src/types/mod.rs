// ABOUTME: Validated domain types for deployments.
// ABOUTME: Pull request ids, owner/repo slugs, and branch destinations.

mod destination;
mod pr_id;
mod repo_slug;

pub use destination::Destination;
pub use pr_id::{PrId, PrIdError};
pub use repo_slug::{RepoSlug, RepoSlugError};
