// ABOUTME: Non-fatal problems noticed while publishing.
// ABOUTME: Recorded during the run and printed once it finishes.

use std::fmt;

/// Something the user should hear about that did not fail the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// `git commit` answered with neither a commit nor "nothing to commit".
    UnrecognizedCommit,
    /// The pull request comment was not attempted.
    NotificationSkipped,
}

impl Warning {
    pub fn unrecognized_commit(message: impl Into<String>) -> Self {
        Warning {
            kind: WarningKind::UnrecognizedCommit,
            message: message.into(),
        }
    }

    pub fn notification_skipped(message: impl Into<String>) -> Self {
        Warning {
            kind: WarningKind::NotificationSkipped,
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Warnings gathered over one deployment, in the order they occurred.
#[derive(Debug, Default)]
pub struct Diagnostics {
    collected: Vec<Warning>,
}

impl Diagnostics {
    pub fn warn(&mut self, warning: Warning) {
        tracing::debug!(kind = ?warning.kind, "{}", warning.message);
        self.collected.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.collected
    }

    pub fn has_warnings(&self) -> bool {
        !self.collected.is_empty()
    }

    pub fn has(&self, kind: WarningKind) -> bool {
        self.collected.iter().any(|w| w.kind == kind)
    }
}
