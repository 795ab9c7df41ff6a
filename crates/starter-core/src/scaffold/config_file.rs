//! Starter configuration files and path-alias instructions

use crate::error::{Result, ScaffoldError};
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// A static file written once at the project root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigFile {
    /// Path relative to the project root
    pub path: &'static str,
    pub content: &'static str,
}

/// Outcome of emitting a config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission {
    Written(PathBuf),
    /// The file already existed and was left untouched
    Skipped(PathBuf),
}

impl Emission {
    pub fn path(&self) -> &Path {
        match self {
            Emission::Written(path) | Emission::Skipped(path) => path,
        }
    }
}

/// Write `file` under `root` unless something already exists at its path.
///
/// The existence check and the write are one `create_new` open, so the
/// checked name and the written name cannot drift apart.
pub async fn emit_config_file(root: &Path, file: &ConfigFile) -> Result<Emission> {
    let path = root.join(file.path);

    let mut handle = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .await
    {
        Ok(handle) => handle,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            return Ok(Emission::Skipped(path));
        }
        Err(e) => return Err(ScaffoldError::io(&path, e)),
    };

    handle
        .write_all(file.content.as_bytes())
        .await
        .map_err(|e| ScaffoldError::io(&path, e))?;
    handle
        .flush()
        .await
        .map_err(|e| ScaffoldError::io(&path, e))?;

    Ok(Emission::Written(path))
}

/// Snippet the user pastes into `tsconfig.json` under `compilerOptions`
/// so `@/<dir>/*` imports type-check. Without directories only `baseUrl`
/// is printed.
pub fn alias_instructions(dirs: &[&str]) -> String {
    let mut text = String::from(
        "Add the following to your `tsconfig.json` inside `compilerOptions`:\n\n  \"baseUrl\": \".\"",
    );
    if dirs.is_empty() {
        return text;
    }

    let paths = dirs
        .iter()
        .map(|dir| format!("    \"@/{dir}/*\": [\"{dir}/*\"]"))
        .collect::<Vec<_>>()
        .join(",\n");
    text.push_str(&format!(",\n  \"paths\": {{\n{}\n  }}", paths));
    text
}
