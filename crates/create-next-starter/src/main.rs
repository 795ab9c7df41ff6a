//! create-next-starter - Bootstrap a Next.js + TypeScript project in place

use anyhow::{Context, Result};
use clap::Parser;
use starter_core::{ConfigFile, InstallMode, InstallRequest, StarterConfig};

/// Webpack hook that resolves `.ts`/`.tsx` and maps `@` to the project root
const NEXT_CONFIG: &str = r#"/* eslint-disable no-param-reassign */

const path = require('path')

module.exports = {
  webpack: (config) => {
    config.resolve.extensions.push('.ts', '.tsx')
    config.resolve.alias['@'] = path.resolve(__dirname)

    return config
  },
}
"#;

/// Next.js starter configuration
#[derive(Clone)]
pub struct NextStarter;

impl StarterConfig for NextStarter {
    fn display_name(&self) -> &'static str {
        "Next.js Starter"
    }

    fn package_manager_env(&self) -> &'static str {
        "CREATE_NEXT_STARTER_PACKAGE_MANAGER"
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
                "Installing typescript and typescript parser",
                InstallMode::SaveDev,
                "typescript @typescript-eslint/parser",
            ),
            InstallRequest::new(
                "Installing required Next packages",
                InstallMode::Save,
                "next react react-dom",
            ),
            InstallRequest::new(
                "Installing types for Next packages",
                InstallMode::SaveDev,
                "@types/next @types/react @types/react-dom @types/node",
            ),
            InstallRequest::new("Installing Sass support", InstallMode::SaveDev, "sass"),
        ]
    }

    fn config_file(&self) -> ConfigFile {
        ConfigFile {
            path: "next.config.js",
            content: NEXT_CONFIG,
        }
    }

    fn manual_steps(&self) -> Vec<String> {
        vec!["npx eslint --init".to_string(), "npx tsc --init".to_string()]
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-next-starter")]
#[command(about = "Bootstrap a Next.js + TypeScript project in the current directory")]
#[command(version)]
pub struct Args {}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let _args = Args::parse();
    let config = NextStarter;

    let root = std::env::current_dir().context("Failed to read the current directory")?;
    let result = starter_core::run(&config, &root).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result.map(|_| ())
}
