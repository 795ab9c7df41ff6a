//! Starter Core - Shared library for project bootstrapping CLIs
//!
//! This library installs packages through the detected package manager, lays
//! out the project directories, merges run-scripts into `package.json`, and
//! writes starter config files. A binary describes *what* to scaffold through
//! the [`StarterConfig`] trait; this crate decides the order and does the work.
//!
//! # Architecture
//!
//! - **Layer 1: Core Operations** - Package manager selection, command
//!   execution, manifest merging, directory and config file creation
//! - **Layer 2: Workflow Orchestration** - `StarterConfig` trait and the
//!   step [`pipeline`]
//! - **Layer 3: CLI Interface** - Optional cliclack framing (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based intro/outro around a run
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use starter_core::{package_manager::{PackageManager, ShellRunner}, Scaffolder};
//!
//! let root = std::env::current_dir()?;
//! let manager = PackageManager::detect(&root);
//! let report = Scaffolder::new(&MyStarter, &ShellRunner, manager, root).run().await?;
//! ```

pub mod error;
pub mod output;
pub mod package_manager;
pub mod pipeline;
pub mod product;
pub mod scaffold;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types for convenience
pub use error::{Result, ScaffoldError};
pub use package_manager::{InstallMode, InstallRequest, PackageManager, ShellRunner};
pub use pipeline::{Report, Scaffolder, Step};
pub use product::StarterConfig;
pub use scaffold::{ConfigFile, Emission};

#[cfg(feature = "tui")]
pub use tui::run;
