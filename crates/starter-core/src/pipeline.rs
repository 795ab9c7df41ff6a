//! Ordered scaffolding steps
//!
//! The whole run is a flat list of [`Step`]s executed one after another.
//! The first failing step stops the run; nothing already written to disk is
//! rolled back.

use crate::error::Result;
use crate::output::{log_progress, log_skipped, log_status};
use crate::package_manager::{install, CommandRunner, InstallMode, InstallRequest, PackageManager};
use crate::product::StarterConfig;
use crate::scaffold::{self, Emission};
use anyhow::Context;
use colored::Colorize;
use std::path::PathBuf;

/// A single scaffolding step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Plain `install` so the manager has a consistent starting state
    Bootstrap,
    EnsureManifest,
    MergeScripts,
    EnsureDirectories,
    AliasInstructions,
    EmitConfig,
    Install(InstallRequest),
    ManualReminder,
}

impl Step {
    /// Short description used in error context
    pub fn describe(&self) -> String {
        match self {
            Step::Bootstrap => "Package manager bootstrap".to_string(),
            Step::EnsureManifest => "Manifest initialization".to_string(),
            Step::MergeScripts => "Run-script merge".to_string(),
            Step::EnsureDirectories => "Directory creation".to_string(),
            Step::AliasInstructions => "Alias instructions".to_string(),
            Step::EmitConfig => "Config file emission".to_string(),
            Step::Install(request) => format!("Install of {}", request.packages.join(", ")),
            Step::ManualReminder => "Manual step reminder".to_string(),
        }
    }
}

/// The fixed step order for `config`
pub fn plan<C: StarterConfig>(config: &C) -> Vec<Step> {
    let mut steps = vec![
        Step::Bootstrap,
        Step::EnsureManifest,
        Step::MergeScripts,
        Step::EnsureDirectories,
        Step::AliasInstructions,
        Step::EmitConfig,
    ];
    steps.extend(config.install_plan().into_iter().map(Step::Install));
    steps.push(Step::ManualReminder);
    steps
}

/// What a finished (or partially finished) run changed
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub completed: Vec<Step>,
    pub manifest_created: bool,
    pub scripts_added: Vec<String>,
    pub directories_created: Vec<String>,
    pub config_file: Option<Emission>,
}

/// Runs the plan for one project root
pub struct Scaffolder<'a, C: StarterConfig, R: CommandRunner> {
    config: &'a C,
    runner: &'a R,
    manager: PackageManager,
    root: PathBuf,
}

impl<'a, C: StarterConfig, R: CommandRunner> Scaffolder<'a, C, R> {
    pub fn new(config: &'a C, runner: &'a R, manager: PackageManager, root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            runner,
            manager,
            root: root.into(),
        }
    }

    /// Execute every step in order, stopping at the first failure
    pub async fn run(&self) -> anyhow::Result<Report> {
        let mut report = Report::default();

        for step in plan(self.config) {
            self.execute(&step, &mut report)
                .await
                .with_context(|| format!("{} failed", step.describe()))?;
            report.completed.push(step);
        }

        Ok(report)
    }

    async fn execute(&self, step: &Step, report: &mut Report) -> Result<()> {
        match step {
            Step::Bootstrap => {
                let request = InstallRequest::new(
                    format!("Preparing {}", self.manager),
                    InstallMode::All,
                    "",
                );
                install(self.runner, self.manager, &self.root, &request).await?;
            }
            Step::EnsureManifest => {
                report.manifest_created =
                    scaffold::ensure_manifest(self.runner, self.manager, &self.root).await?;
            }
            Step::MergeScripts => {
                log_progress(&format!("Adding run scripts to {}", scaffold::MANIFEST_FILE));
                let added = finish(
                    scaffold::merge_manifest_scripts(&self.root, self.config.default_scripts())
                        .await,
                )?;
                report.scripts_added = added;
            }
            Step::EnsureDirectories => {
                log_progress("Creating project directories");
                let created = finish(
                    scaffold::ensure_directories(&self.root, self.config.directories()).await,
                )?;
                report.directories_created = created;
            }
            Step::AliasInstructions => {
                println!();
                println!("{}", scaffold::alias_instructions(self.config.directories()));
                println!();
            }
            Step::EmitConfig => {
                let file = self.config.config_file();
                log_progress(&format!("Writing {}", file.path));
                let emission = scaffold::emit_config_file(&self.root, &file).await;
                match &emission {
                    Ok(Emission::Skipped(_)) => log_skipped("already exists"),
                    other => log_status(other.is_ok()),
                }
                report.config_file = Some(emission?);
            }
            Step::Install(request) => {
                install(self.runner, self.manager, &self.root, request).await?;
            }
            Step::ManualReminder => {
                println!();
                println!("{}", manual_reminder(&self.config.manual_steps()).yellow());
            }
        }
        Ok(())
    }
}

/// Close a local step's progress line with its outcome
fn finish<T>(result: Result<T>) -> Result<T> {
    log_status(result.is_ok());
    result
}

/// Closing reminder listing the commands left for the user
pub fn manual_reminder(steps: &[String]) -> String {
    let mut text = String::from("Don't forget to run these commands manually:");
    for (i, step) in steps.iter().enumerate() {
        text.push_str(&format!("\n  {}.  {}", i + 1, step));
    }
    text
}
