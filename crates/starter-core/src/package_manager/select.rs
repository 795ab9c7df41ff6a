//! Package manager selection from lockfile evidence

use std::fmt;
use std::path::Path;

/// Lockfile whose presence means the project is owned by yarn
pub const YARN_LOCKFILE: &str = "yarn.lock";

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Yarn,
}

/// How packages passed to an install command are recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstallMode {
    /// Install everything already listed in the manifest
    All,
    /// Add as a runtime dependency
    Save,
    /// Add as a development dependency
    SaveDev,
}

impl PackageManager {
    /// Pick the manager that owns `root`.
    ///
    /// A `yarn.lock` selects yarn; anything else falls back to npm.
    pub fn detect(root: &Path) -> Self {
        if root.join(YARN_LOCKFILE).is_file() {
            PackageManager::Yarn
        } else {
            PackageManager::Npm
        }
    }

    /// Parse a manager name as given in an environment override
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "npm" => Some(PackageManager::Npm),
            "yarn" => Some(PackageManager::Yarn),
            _ => None,
        }
    }

    /// Name of the executable
    pub fn binary(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Command prefix for the requested install mode
    pub fn invocation(&self, mode: InstallMode) -> &'static str {
        match (self, mode) {
            (PackageManager::Yarn, InstallMode::All) => "yarn install",
            (PackageManager::Yarn, InstallMode::Save) => "yarn add",
            (PackageManager::Yarn, InstallMode::SaveDev) => "yarn add -D",
            (PackageManager::Npm, InstallMode::All) => "npm install",
            (PackageManager::Npm, InstallMode::Save) => "npm install",
            (PackageManager::Npm, InstallMode::SaveDev) => "npm install --save-dev",
        }
    }

    /// Command that creates a default manifest without prompting
    pub fn init_command(&self) -> String {
        format!("{} init -y", self.binary())
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.binary())
    }
}

/// Where the selected manager came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Forced through the environment override
    Override(PackageManager),
    /// Found by lockfile detection
    Detected(PackageManager),
    /// Override was set but not recognised; detection was used instead
    InvalidOverride {
        value: String,
        detected: PackageManager,
    },
}

impl Selection {
    pub fn manager(&self) -> PackageManager {
        match self {
            Selection::Override(pm) | Selection::Detected(pm) => *pm,
            Selection::InvalidOverride { detected, .. } => *detected,
        }
    }
}

/// Resolve the manager for `root`, honouring an optional override value
pub fn select(root: &Path, override_value: Option<&str>) -> Selection {
    match override_value.filter(|v| !v.trim().is_empty()) {
        Some(value) => match PackageManager::parse(value) {
            Some(pm) => Selection::Override(pm),
            None => Selection::InvalidOverride {
                value: value.to_string(),
                detected: PackageManager::detect(root),
            },
        },
        None => Selection::Detected(PackageManager::detect(root)),
    }
}

/// Resolve the manager for `root`, reading the override from `env_var`
pub fn select_from_env(root: &Path, env_var: &str) -> Selection {
    let value = std::env::var(env_var).ok();
    select(root, value.as_deref())
}
