// ABOUTME: Classification of a git commit attempt.
// ABOUTME: Decides between push, nothing-to-deploy, and an unrecognized response.

use crate::exec::CommandOutput;

const NOTHING_TO_COMMIT: &str = "nothing to commit";

/// What a commit attempt amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A commit was created and should be pushed.
    Committed,
    /// The index matched HEAD; there is nothing to deploy.
    NothingToCommit,
    /// git failed in a way that matches neither case. Nothing is pushed.
    Unrecognized,
}

impl CommitOutcome {
    pub fn classify(output: &CommandOutput) -> Self {
        if output.success() {
            CommitOutcome::Committed
        } else if output.stdout.contains(NOTHING_TO_COMMIT)
            || output.stderr.contains(NOTHING_TO_COMMIT)
        {
            CommitOutcome::NothingToCommit
        } else {
            CommitOutcome::Unrecognized
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(code: i32, stdout: &str) -> CommandOutput {
        CommandOutput {
            exit_code: Some(code),
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    #[test]
    fn files_changed_is_committed() {
        let out = output(0, "[gh-pages 1a2b3c4] Deploy\n 3 files changed, 10 insertions(+)\n");
        assert_eq!(CommitOutcome::classify(&out), CommitOutcome::Committed);
    }

    #[test]
    fn single_file_change_is_committed() {
        let out = output(0, "[gh-pages 1a2b3c4] Deploy\n 1 file changed, 1 insertion(+)\n");
        assert_eq!(CommitOutcome::classify(&out), CommitOutcome::Committed);
    }

    #[test]
    fn nothing_to_commit_is_a_no_op() {
        let out = output(1, "On branch gh-pages\nnothing to commit, working tree clean\n");
        assert_eq!(CommitOutcome::classify(&out), CommitOutcome::NothingToCommit);
    }

    #[test]
    fn message_text_does_not_affect_a_successful_commit() {
        let out = output(0, "[gh-pages 1a2b3c4] nothing to commit here\n 1 file changed\n");
        assert_eq!(CommitOutcome::classify(&out), CommitOutcome::Committed);
    }

    #[test]
    fn other_failures_are_unrecognized() {
        let mut out = output(1, "");
        out.stderr = "pre-commit hook rejected the commit".to_string();
        assert_eq!(CommitOutcome::classify(&out), CommitOutcome::Unrecognized);
    }
}
