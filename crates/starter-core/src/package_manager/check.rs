//! Availability check for the selected package manager

use super::runner::execute;
use super::select::PackageManager;
use anyhow::Result;
use std::path::Path;

/// Package manager detection result
#[derive(Debug, Clone)]
pub struct ManagerInfo {
    pub manager: PackageManager,
    pub version: Option<String>,
    pub available: bool,
}

/// Run `<binary> --version` in `root` to see whether the manager is usable.
///
/// Goes through the same shell as every other command so `npm.cmd` and
/// `yarn.cmd` resolve on Windows.
pub async fn check_manager(manager: PackageManager, root: &Path) -> ManagerInfo {
    let version = query_version(manager.binary(), root).await;
    ManagerInfo {
        manager,
        available: version.is_some(),
        version,
    }
}

/// Fail early when the selected manager cannot be run
pub async fn require_manager(manager: PackageManager, root: &Path) -> Result<ManagerInfo> {
    let info = check_manager(manager, root).await;
    if !info.available {
        anyhow::bail!(
            "{} is not installed or not on PATH ({})",
            manager,
            install_hint(manager)
        );
    }
    Ok(info)
}

async fn query_version(binary: &str, root: &Path) -> Option<String> {
    execute(&format!("{} --version", binary), root)
        .await
        .ok()
        .map(|output| output.stdout.trim().to_string())
}

fn install_hint(manager: PackageManager) -> &'static str {
    match manager {
        PackageManager::Npm => "install Node.js from https://nodejs.org",
        PackageManager::Yarn => "install it with `npm install -g yarn`",
    }
}
