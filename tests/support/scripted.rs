// ABOUTME: Scripted CommandRunner that fakes git while running shell commands for real.
// ABOUTME: Records every invocation so tests can assert on pushes, commits and restores.

use async_trait::async_trait;
use gh_pages_deploy::exec::{CommandError, CommandOutput, CommandRunner, CommandSpec, SystemRunner};
use std::fs;
use std::path::Path;
use std::sync::Mutex;

pub struct ScriptedRunner {
    calls: Mutex<Vec<CommandSpec>>,
    /// Origin's fetch URL. `None` means no origin remote is configured.
    pub fetch_url: Option<String>,
    /// Files (relative path, content) present in the cloned branch.
    pub branch_files: Vec<(String, String)>,
    /// Reported by `git diff --cached --name-only`.
    pub staged_paths: Vec<String>,
    /// Whether `git diff --cached --quiet` reports changes.
    pub index_dirty: bool,
    pub commit_output: CommandOutput,
    shell: SystemRunner,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fetch_url: Some("https://github.com/org/repo.git".to_string()),
            branch_files: Vec::new(),
            staged_paths: vec!["index.html".to_string()],
            index_dirty: true,
            commit_output: committed("3 files changed, 12 insertions(+), 4 deletions(-)"),
            shell: SystemRunner::new(false),
        }
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().unwrap().clone()
    }

    /// Argument lists of git invocations whose first argument is `subcommand`.
    pub fn git_calls(&self, subcommand: &str) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter(|c| c.program() == "git")
            .map(|c| c.get_args().to_vec())
            .filter(|args| args.first().map(String::as_str) == Some(subcommand))
            .collect()
    }

    pub fn shell_calls(&self) -> usize {
        self.calls().iter().filter(|c| c.program() != "git").count()
    }

    fn seed_clone(&self, target: &Path) -> std::io::Result<()> {
        fs::create_dir_all(target.join(".git"))?;
        fs::write(target.join(".git").join("HEAD"), "ref: refs/heads/gh-pages\n")?;
        for (path, content) in &self.branch_files {
            let file = target.join(path);
            if let Some(parent) = file.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(file, content)?;
        }
        Ok(())
    }
}

pub fn committed(summary: &str) -> CommandOutput {
    CommandOutput {
        exit_code: Some(0),
        stdout: format!("[gh-pages 1a2b3c4] Deploy to GitHub Pages.\n {summary}\n"),
        stderr: String::new(),
    }
}

pub fn nothing_to_commit() -> CommandOutput {
    CommandOutput {
        exit_code: Some(1),
        stdout: "On branch gh-pages\nnothing to commit, working tree clean\n".to_string(),
        stderr: String::new(),
    }
}

fn exited(code: i32, stdout: String) -> Result<CommandOutput, CommandError> {
    Ok(CommandOutput {
        exit_code: Some(code),
        stdout,
        stderr: String::new(),
    })
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, CommandError> {
        self.calls.lock().unwrap().push(spec.clone());

        if spec.program() != "git" {
            return self.shell.run(spec).await;
        }

        let args: Vec<&str> = spec.get_args().iter().map(String::as_str).collect();
        match args.as_slice() {
            ["remote"] => {
                let listed = if self.fetch_url.is_some() { "origin\n" } else { "" };
                exited(0, listed.to_string())
            }
            ["remote", "show", ..] => {
                let mut out = "* remote origin\n".to_string();
                if let Some(ref url) = self.fetch_url {
                    out.push_str(&format!("  Fetch URL: {url}\n  Push  URL: {url}\n"));
                }
                exited(0, out)
            }
            ["clone", .., target] => {
                self.seed_clone(Path::new(target))
                    .map_err(|source| CommandError::Spawn {
                        command: spec.to_string(),
                        source,
                    })?;
                exited(0, String::new())
            }
            ["diff", "--cached", "--name-only", ..] => exited(0, self.staged_paths.join("\0")),
            ["diff", "--cached", "--quiet"] => {
                exited(if self.index_dirty { 1 } else { 0 }, String::new())
            }
            ["commit", ..] => Ok(self.commit_output.clone()),
            _ => exited(0, String::new()),
        }
    }
}
