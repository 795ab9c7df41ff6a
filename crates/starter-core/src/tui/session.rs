//! Charm-style run framing using cliclack

use crate::package_manager::{self, PackageManager, Selection, ShellRunner};
use crate::pipeline::{Report, Scaffolder};
use crate::product::StarterConfig;
use anyhow::Result;
use std::path::Path;

/// Scaffold `root` with the shell runner, framed by cliclack intro/outro
pub async fn run<C: StarterConfig>(config: &C, root: &Path) -> Result<Report> {
    cliclack::intro(config.display_name())?;

    // Step 1: Pick the package manager and make sure it runs
    let manager = select_manager(config, root)?;
    check_manager(manager, root).await?;

    // Step 2: Run every scaffolding step in order
    cliclack::log::info(format!("Scaffolding into {}", root.display()))?;
    let runner = ShellRunner;
    let result = Scaffolder::new(config, &runner, manager, root).run().await;

    // Step 3: Summarize
    match result {
        Ok(report) => {
            print_summary(&report)?;
            cliclack::outro("Happy coding!")?;
            Ok(report)
        }
        Err(e) => {
            cliclack::outro_cancel("Setup stopped. Files created so far were left in place.")?;
            Err(e)
        }
    }
}

fn select_manager<C: StarterConfig>(config: &C, root: &Path) -> Result<PackageManager> {
    let selection = package_manager::select_from_env(root, config.package_manager_env());

    match &selection {
        Selection::Override(pm) => {
            cliclack::log::info(format!(
                "Using {} (set by {})",
                pm,
                config.package_manager_env()
            ))?;
        }
        Selection::Detected(PackageManager::Yarn) => {
            cliclack::log::info("Found yarn.lock, using yarn")?;
        }
        Selection::Detected(pm) => {
            cliclack::log::info(format!("No yarn.lock found, using {}", pm))?;
        }
        Selection::InvalidOverride { value, detected } => {
            cliclack::log::warning(format!(
                "Ignoring {}={:?} (expected npm or yarn), using {}",
                config.package_manager_env(),
                value,
                detected
            ))?;
        }
    }

    Ok(selection.manager())
}

async fn check_manager(manager: PackageManager, root: &Path) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start(format!("Checking {}...", manager));

    match package_manager::require_manager(manager, root).await {
        Ok(info) => {
            spinner.stop(format!(
                "Detected {} ({})",
                manager,
                info.version.as_deref().unwrap_or("unknown")
            ));
            Ok(())
        }
        Err(e) => {
            spinner.stop(format!("{} not found", manager));
            cliclack::log::error(format!("{}", e))?;
            anyhow::bail!("Please install {} and try again.", manager);
        }
    }
}

fn print_summary(report: &Report) -> Result<()> {
    let mut lines = Vec::new();

    if report.manifest_created {
        lines.push("Created package.json".to_string());
    }
    if !report.scripts_added.is_empty() {
        lines.push(format!("Added scripts: {}", report.scripts_added.join(", ")));
    }
    if !report.directories_created.is_empty() {
        lines.push(format!(
            "Created directories: {}",
            report.directories_created.join(", ")
        ));
    }
    if let Some(emission) = &report.config_file {
        let verb = match emission {
            crate::scaffold::Emission::Written(_) => "Wrote",
            crate::scaffold::Emission::Skipped(_) => "Kept existing",
        };
        lines.push(format!("{} {}", verb, emission.path().display()));
    }

    cliclack::log::success(lines.join("\n"))?;

    Ok(())
}
