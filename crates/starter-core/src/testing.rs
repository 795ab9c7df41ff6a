//! Test doubles shared by the unit tests

use crate::error::{Result, ScaffoldError};
use crate::package_manager::{CommandOutput, CommandRunner, InstallMode, InstallRequest};
use crate::product::StarterConfig;
use crate::scaffold::ConfigFile;
use std::path::Path;
use std::sync::Mutex;

/// What `npm init -y` would leave behind
pub const INIT_MANIFEST: &str = r#"{
  "name": "app",
  "version": "1.0.0",
  "scripts": {
    "test": "echo \"Error: no test specified\" && exit 1"
  }
}
"#;

/// Records every command instead of running it
#[derive(Debug, Default)]
pub struct FakeRunner {
    commands: Mutex<Vec<String>>,
    fail_on: Option<String>,
    init_writes_manifest: bool,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self {
            init_writes_manifest: true,
            ..Default::default()
        }
    }

    /// Fail the first command that starts with `prefix`
    pub fn failing_on(prefix: &str) -> Self {
        Self {
            fail_on: Some(prefix.to_string()),
            ..Self::new()
        }
    }

    /// `init -y` succeeds without producing a manifest
    pub fn with_silent_init() -> Self {
        Self {
            init_writes_manifest: false,
            ..Default::default()
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeRunner {
    async fn run(&self, command: &str, cwd: &Path) -> Result<CommandOutput> {
        self.commands.lock().unwrap().push(command.to_string());

        if self.fail_on.as_deref().is_some_and(|p| command.starts_with(p)) {
            return Err(ScaffoldError::CommandFailed {
                command: command.to_string(),
                code: Some(1),
                stderr: "forced failure".to_string(),
            });
        }

        if self.init_writes_manifest && command.ends_with(" init -y") {
            std::fs::write(cwd.join("package.json"), INIT_MANIFEST)
                .map_err(|e| ScaffoldError::io(cwd.join("package.json"), e))?;
        }

        Ok(CommandOutput::default())
    }
}

/// Minimal starter used by the pipeline tests
#[derive(Debug, Clone)]
pub struct TestStarter;

impl StarterConfig for TestStarter {
    fn display_name(&self) -> &'static str {
        "Test Starter"
    }

    fn package_manager_env(&self) -> &'static str {
        "TEST_STARTER_PACKAGE_MANAGER"
    }

    fn directories(&self) -> &'static [&'static str] {
        &["pages", "components", "layout", "public", "style"]
    }

    fn default_scripts(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("dev", "next"),
            ("build", "next build"),
            ("start", "next start"),
        ]
    }

    fn install_plan(&self) -> Vec<InstallRequest> {
        vec![
            InstallRequest::new("Installing eslint", InstallMode::SaveDev, "eslint"),
            InstallRequest::new(
                "Installing required Next packages",
                InstallMode::Save,
                "next react react-dom",
            ),
        ]
    }

    fn config_file(&self) -> ConfigFile {
        ConfigFile {
            path: "next.config.js",
            content: "config.resolve.alias['@'] = path.resolve(__dirname)\n",
        }
    }

    fn manual_steps(&self) -> Vec<String> {
        vec!["npx eslint --init".to_string(), "npx tsc --init".to_string()]
    }
}
