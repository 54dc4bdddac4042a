// ABOUTME: External command execution behind the CommandRunner trait.
// ABOUTME: Runs git and the build command via tokio::process, capturing or streaming output.

use async_trait::async_trait;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

/// Errors from running an external command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to execute `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Exec code({}) on executing: {command}\n{stderr}",
        .code.map_or_else(|| "signal".to_string(), |c| c.to_string())
    )]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

/// How a command's output is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputHandling {
    /// Capture stdout and stderr.
    Capture,
    /// Stream stdout to the console; stream stderr and capture it too.
    Stream,
}

/// A fully described command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
    cwd: PathBuf,
    script: Option<String>,
    handling: OutputHandling,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
            script: None,
            handling: OutputHandling::Capture,
        }
    }

    /// A command line interpreted by the platform shell.
    pub fn shell(script: &str, cwd: impl Into<PathBuf>) -> Self {
        let (program, flag) = if cfg!(windows) {
            ("cmd", "/C")
        } else {
            ("sh", "-c")
        };
        let mut spec = Self::new(program, cwd).arg(flag).arg(script);
        spec.script = Some(script.to_string());
        spec
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn streaming(mut self) -> Self {
        self.handling = OutputHandling::Stream;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn handling(&self) -> OutputHandling {
        self.handling
    }
}

/// Renders the command as the user would type it, with URL credentials masked.
impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref script) = self.script {
            return write!(f, "{script}");
        }
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", redact_credentials(arg))?;
        }
        Ok(())
    }
}

/// Output from a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Convert a non-zero exit into `CommandError::Failed`.
    pub fn check(self, spec: &CommandSpec) -> Result<Self, CommandError> {
        if self.success() {
            Ok(self)
        } else {
            Err(CommandError::Failed {
                command: spec.to_string(),
                code: self.exit_code,
                stderr: self.stderr,
            })
        }
    }
}

/// Seam between the deployment pipeline and the processes it drives.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run the command to completion. A non-zero exit is not an error here;
    /// only failing to start or read from the process is.
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, CommandError>;

    /// Run the command and fail on a non-zero exit.
    async fn run_checked(&self, spec: &CommandSpec) -> Result<CommandOutput, CommandError> {
        self.run(spec).await?.check(spec)
    }
}

/// Runs commands on the local system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner {
    echo: bool,
}

impl SystemRunner {
    /// `echo` prints an `executing:` line for every command.
    pub fn new(echo: bool) -> Self {
        Self { echo }
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, CommandError> {
        let shown = spec.to_string();
        if self.echo {
            println!("   executing: {} in {}", shown, spec.cwd.display());
        }
        tracing::debug!(command = %shown, cwd = %spec.cwd.display(), "running command");

        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args).current_dir(&spec.cwd);

        let spawn_err = |source| CommandError::Spawn {
            command: shown.clone(),
            source,
        };

        let output = match spec.handling {
            OutputHandling::Capture => {
                let output = cmd
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped())
                    .output()
                    .await
                    .map_err(spawn_err)?;
                CommandOutput {
                    exit_code: output.status.code(),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                }
            }
            OutputHandling::Stream => {
                let mut child = cmd
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::piped())
                    .spawn()
                    .map_err(spawn_err)?;

                let mut captured = String::new();
                if let Some(stderr) = child.stderr.take() {
                    let mut reader = BufReader::new(stderr);
                    let mut line = Vec::new();
                    loop {
                        line.clear();
                        let read = reader.read_until(b'\n', &mut line).await.map_err(spawn_err)?;
                        if read == 0 {
                            break;
                        }
                        let text = String::from_utf8_lossy(&line);
                        eprint!("{text}");
                        captured.push_str(&text);
                    }
                }

                let status = child.wait().await.map_err(spawn_err)?;
                CommandOutput {
                    exit_code: status.code(),
                    stdout: String::new(),
                    stderr: captured,
                }
            }
        };

        if !output.success() {
            tracing::debug!(command = %shown, code = ?output.exit_code, "command exited non-zero");
        }

        Ok(output)
    }
}

/// Mask the userinfo part of an `scheme://user@host` URL.
pub fn redact_credentials(value: &str) -> String {
    let Some(scheme_end) = value.find("://") else {
        return value.to_string();
    };
    let rest = &value[scheme_end + 3..];
    let authority_end = rest.find('/').unwrap_or(rest.len());
    match rest[..authority_end].rfind('@') {
        Some(at) => format!("{}***{}", &value[..scheme_end + 3], &rest[at..]),
        None => value.to_string(),
    }
}
