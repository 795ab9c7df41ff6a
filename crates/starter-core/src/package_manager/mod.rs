//! Package manager detection, command execution and installs
//!
//! This module provides:
//! - Lockfile-based selection between yarn and npm
//! - A shell command runner with captured output
//! - Sequential package installs built on the two

pub mod check;
pub mod install;
pub mod runner;
pub mod select;

pub use check::{check_manager, require_manager, ManagerInfo};
pub use install::{install, InstallRequest};
pub use runner::{CommandOutput, CommandRunner, ShellRunner};
pub use select::{select, select_from_env, InstallMode, PackageManager, Selection};
