//! Starter configuration trait for CLI binaries
//!
//! A binary implements this trait to describe what gets scaffolded. The core
//! library only sequences the steps.

use crate::package_manager::InstallRequest;
use crate::scaffold::ConfigFile;

/// Configuration trait for a project starter
///
/// Each starter defines:
/// - Product identity (display name)
/// - The directory layout and default run-scripts
/// - The packages to install, in order
/// - The config file to write and the manual follow-up commands
pub trait StarterConfig: Clone + Send + Sync + 'static {
    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Environment variable that forces a package manager (`npm` or `yarn`)
    fn package_manager_env(&self) -> &'static str;

    /// Directories created at the project root, in order
    fn directories(&self) -> &'static [&'static str];

    /// Run-scripts added to the manifest when missing
    fn default_scripts(&self) -> &'static [(&'static str, &'static str)];

    /// Package installs, run one after another
    fn install_plan(&self) -> Vec<InstallRequest>;

    /// Config file written once at the project root
    fn config_file(&self) -> ConfigFile;

    /// Commands the user still has to run by hand
    fn manual_steps(&self) -> Vec<String>;
}
