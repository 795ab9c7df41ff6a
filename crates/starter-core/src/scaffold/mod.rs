//! Project scaffolding on disk
//!
//! This module provides:
//! - `package.json` creation and default run-script merging
//! - Idempotent directory creation
//! - Write-once starter config files and tsconfig alias instructions

pub mod config_file;
pub mod layout;
pub mod manifest;

pub use config_file::{alias_instructions, emit_config_file, ConfigFile, Emission};
pub use layout::ensure_directories;
pub use manifest::{ensure_manifest, merge_manifest_scripts, merge_scripts, MANIFEST_FILE};
