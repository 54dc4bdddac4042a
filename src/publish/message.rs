// ABOUTME: Commit message templating for deployments.
// ABOUTME: Expands the #PR placeholder for preview deploys and drops it otherwise.

use crate::config::DEFAULT_COMMIT_MESSAGE;
use crate::types::Destination;

pub const PR_PLACEHOLDER: &str = "#PR";

/// Expand `#PR` to `PR #<id>` for previews, or remove it for root deploys.
/// A message left blank by the removal falls back to the default message.
pub fn resolve_commit_message(template: &str, destination: &Destination) -> String {
    if !template.contains(PR_PLACEHOLDER) {
        return template.to_string();
    }

    let replacement = match destination.pr_id() {
        Some(id) => format!("PR #{id}"),
        None => String::new(),
    };
    let message = template.replace(PR_PLACEHOLDER, &replacement);

    if message.trim().is_empty() {
        DEFAULT_COMMIT_MESSAGE.to_string()
    } else {
        message
    }
}
