//! Shell command execution
//!
//! Commands run to completion with their output captured. There is no
//! timeout: the child's exit is the only completion signal.

use crate::error::{Result, ScaffoldError};
use crate::output::log_status;
use std::future::Future;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// Captured output of a successful command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Executes shell command lines on behalf of the scaffolding steps
pub trait CommandRunner {
    /// Run `command` in `cwd`, failing on spawn errors and non-zero exits
    fn run(&self, command: &str, cwd: &Path) -> impl Future<Output = Result<CommandOutput>> + Send;
}

/// Runs commands through the platform shell and prints a status glyph
/// once each one finishes
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    async fn run(&self, command: &str, cwd: &Path) -> Result<CommandOutput> {
        let result = execute(command, cwd).await;
        log_status(result.is_ok());
        result
    }
}

/// Run a command line through the shell and capture its output
pub async fn execute(command: &str, cwd: &Path) -> Result<CommandOutput> {
    let output = shell(command)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|source| ScaffoldError::Spawn {
            command: command.to_string(),
            source,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        return Err(ScaffoldError::CommandFailed {
            command: command.to_string(),
            code: output.status.code(),
            stderr,
        });
    }

    Ok(CommandOutput { stdout, stderr })
}

#[cfg(unix)]
fn shell(command: &str) -> TokioCommand {
    let mut cmd = TokioCommand::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell(command: &str) -> TokioCommand {
    let mut cmd = TokioCommand::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}
