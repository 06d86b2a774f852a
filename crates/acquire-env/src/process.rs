//! Process-execution collaborator
//!
//! Everything the orchestrator learns about the machine comes from running
//! processes: `python -c "import x"`, `<tool> --version`, `conda info --json`
//! and the install commands themselves. [`ProcessRunner`] is the seam tests
//! replace; [`TokioProcessRunner`] is the real implementation.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::args::command_line;
use crate::error::{Error, Result};

/// Options for a single process invocation.
#[derive(Debug, Clone, Default)]
pub struct ExecOptions {
    /// Working directory; inherits the current one when `None`.
    pub cwd: Option<PathBuf>,
    /// Append stderr to stdout in the returned output.
    pub merge_stdout_stderr: bool,
    /// Kill the process when it runs longer than this.
    pub timeout: Option<Duration>,
}

impl ExecOptions {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn merged(mut self) -> Self {
        self.merge_stdout_stderr = true;
        self
    }
}

/// Captured output of a successful process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs external processes.
///
/// Both methods resolve `Ok` only on a zero exit status; any other outcome
/// is an explicit `Err` the caller decides how to fold.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run `file` directly with `args`.
    async fn exec(&self, file: &str, args: &[String], options: &ExecOptions) -> Result<ExecOutput>;

    /// Run a full command line through the platform shell.
    async fn shell_exec(&self, command: &str, options: &ExecOptions) -> Result<ExecOutput>;
}

/// [`ProcessRunner`] backed by `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioProcessRunner;

impl TokioProcessRunner {
    pub fn new() -> Self {
        Self
    }

    async fn run(&self, mut cmd: Command, shown: String, options: &ExecOptions) -> Result<ExecOutput> {
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(cwd) = &options.cwd {
            cmd.current_dir(cwd);
        }

        debug!(command = %shown, "Spawning process");

        let output = match options.timeout {
            Some(limit) => tokio::time::timeout(limit, cmd.output())
                .await
                .map_err(|_| Error::Timeout {
                    command: shown.clone(),
                    seconds: limit.as_secs(),
                })?,
            None => cmd.output().await,
        }
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::CommandNotFound {
                    command: shown.clone(),
                }
            } else {
                Error::Io(e)
            }
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(Error::CommandFailed {
                command: shown,
                code: output.status.code().unwrap_or(-1),
                stderr,
            });
        }

        let stdout = if options.merge_stdout_stderr {
            format!("{stdout}{stderr}")
        } else {
            stdout
        };
        Ok(ExecOutput { stdout, stderr })
    }
}

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn exec(&self, file: &str, args: &[String], options: &ExecOptions) -> Result<ExecOutput> {
        let mut cmd = Command::new(file);
        cmd.args(args);
        self.run(cmd, command_line(file, args), options).await
    }

    async fn shell_exec(&self, command: &str, options: &ExecOptions) -> Result<ExecOutput> {
        let cmd = if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command);
            cmd
        };
        self.run(cmd, command.to_string(), options).await
    }
}
