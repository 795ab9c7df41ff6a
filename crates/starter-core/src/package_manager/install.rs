//! Package installation through the selected manager

use super::runner::{CommandOutput, CommandRunner};
use super::select::{InstallMode, PackageManager};
use crate::error::Result;
use crate::output::log_progress;
use std::path::Path;

/// One install call: what to print, how to record the packages, and which
/// packages to fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    pub label: String,
    pub mode: InstallMode,
    pub packages: Vec<String>,
}

impl InstallRequest {
    /// Build a request from a whitespace-separated package list
    pub fn new(label: impl Into<String>, mode: InstallMode, packages: &str) -> Self {
        Self {
            label: label.into(),
            mode,
            packages: packages.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Full command line for `manager`
    pub fn command(&self, manager: PackageManager) -> String {
        let mut command = manager.invocation(self.mode).to_string();
        for package in &self.packages {
            command.push(' ');
            command.push_str(package);
        }
        command
    }
}

/// Print the request's progress line and run its command to completion
pub async fn install<R: CommandRunner>(
    runner: &R,
    manager: PackageManager,
    root: &Path,
    request: &InstallRequest,
) -> Result<CommandOutput> {
    log_progress(&request.label);
    runner.run(&request.command(manager), root).await
}
