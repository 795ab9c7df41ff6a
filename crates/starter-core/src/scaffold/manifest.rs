//! `package.json` initialisation and run-script merging

use crate::error::{Result, ScaffoldError};
use crate::output::log_progress;
use crate::package_manager::runner::CommandRunner;
use crate::package_manager::PackageManager;
use serde_json::{Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Manifest file name at the project root
pub const MANIFEST_FILE: &str = "package.json";

/// Path of the manifest inside `root`
pub fn manifest_path(root: &Path) -> PathBuf {
    root.join(MANIFEST_FILE)
}

/// Why a parsed manifest cannot take scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    NotAnObject,
    ScriptsNotAnObject,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::NotAnObject => write!(f, "top level is not a JSON object"),
            ShapeError::ScriptsNotAnObject => write!(f, "\"scripts\" is not a JSON object"),
        }
    }
}

/// Insert default scripts that the manifest does not define yet.
///
/// Existing entries are never touched; a missing or `null` `scripts` starts
/// out empty. Returns the names that were added, in table order.
pub fn merge_scripts(
    manifest: &mut Value,
    defaults: &[(&str, &str)],
) -> std::result::Result<Vec<String>, ShapeError> {
    let object = manifest.as_object_mut().ok_or(ShapeError::NotAnObject)?;
    let entry = object.entry("scripts").or_insert(Value::Null);
    if entry.is_null() {
        *entry = Value::Object(Map::new());
    }
    let scripts = entry
        .as_object_mut()
        .ok_or(ShapeError::ScriptsNotAnObject)?;

    let mut added = Vec::new();
    for (name, command) in defaults {
        if !scripts.contains_key(*name) {
            scripts.insert(name.to_string(), Value::String(command.to_string()));
            added.push(name.to_string());
        }
    }
    Ok(added)
}

/// Create the manifest with `<manager> init -y` unless it already exists.
///
/// Returns `true` when the init command ran.
pub async fn ensure_manifest<R: CommandRunner>(
    runner: &R,
    manager: PackageManager,
    root: &Path,
) -> Result<bool> {
    let path = manifest_path(root);
    if path.is_file() {
        return Ok(false);
    }

    log_progress(&format!("Creating {} with {}", MANIFEST_FILE, manager));
    runner.run(&manager.init_command(), root).await?;

    if !path.is_file() {
        return Err(ScaffoldError::ManifestMissing { path });
    }
    Ok(true)
}

/// Read and parse the manifest
pub async fn load(path: &Path) -> Result<Value> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ScaffoldError::ManifestMissing {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(ScaffoldError::io(path, e)),
    };

    serde_json::from_str(&content).map_err(|source| ScaffoldError::ManifestParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the manifest back with two-space indentation and a trailing newline
pub async fn save(path: &Path, manifest: &Value) -> Result<()> {
    let mut content =
        serde_json::to_string_pretty(manifest).map_err(|source| {
            ScaffoldError::ManifestSerialize {
                path: path.to_path_buf(),
                source,
            }
        })?;
    content.push('\n');

    fs::write(path, content)
        .await
        .map_err(|e| ScaffoldError::io(path, e))
}

/// Load the manifest in `root`, merge the default scripts, and save it if
/// anything was added
pub async fn merge_manifest_scripts(root: &Path, defaults: &[(&str, &str)]) -> Result<Vec<String>> {
    let path = manifest_path(root);
    let mut manifest = load(&path).await?;

    let added =
        merge_scripts(&mut manifest, defaults).map_err(|e| ScaffoldError::InvalidManifest {
            path: path.clone(),
            reason: e.to_string(),
        })?;

    if !added.is_empty() {
        save(&path, &manifest).await?;
    }
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    const DEFAULTS: &[(&str, &str)] = &[
        ("dev", "next"),
        ("build", "next build"),
        ("start", "next start"),
    ];

    #[test]
    fn test_merge_into_manifest_without_scripts() {
        let mut manifest = json!({ "name": "app" });
        let added = merge_scripts(&mut manifest, DEFAULTS).unwrap();

        assert_eq!(added, vec!["dev", "build", "start"]);
        assert_eq!(manifest["scripts"]["dev"], "next");
        assert_eq!(manifest["scripts"]["build"], "next build");
        assert_eq!(manifest["scripts"]["start"], "next start");
    }

    #[test]
    fn test_merge_keeps_existing_dev_script() {
        let mut manifest = json!({
            "scripts": { "dev": "next dev -p 4000", "lint": "eslint ." }
        });
        let added = merge_scripts(&mut manifest, DEFAULTS).unwrap();

        assert_eq!(added, vec!["build", "start"]);
        assert_eq!(manifest["scripts"]["dev"], "next dev -p 4000");
        assert_eq!(manifest["scripts"]["lint"], "eslint .");
        assert_eq!(manifest["scripts"]["build"], "next build");
        assert_eq!(manifest["scripts"]["start"], "next start");
    }

    #[test]
    fn test_merge_is_noop_when_all_present() {
        let mut manifest = json!({
            "scripts": { "dev": "a", "build": "b", "start": "c" }
        });
        let before = manifest.clone();
        let added = merge_scripts(&mut manifest, DEFAULTS).unwrap();

        assert!(added.is_empty());
        assert_eq!(manifest, before);
    }

    #[test]
    fn test_merge_keeps_npm_init_test_script() {
        // `npm init -y` writes a "test" script; it must survive untouched.
        let mut manifest = json!({
            "scripts": { "test": "echo \"Error: no test specified\" && exit 1" }
        });
        merge_scripts(&mut manifest, DEFAULTS).unwrap();

        let scripts = manifest["scripts"].as_object().unwrap();
        let keys: Vec<&str> = scripts.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["test", "dev", "build", "start"]);
    }

    #[test]
    fn test_merge_rejects_bad_shapes() {
        let mut array = json!([1, 2]);
        assert_eq!(
            merge_scripts(&mut array, DEFAULTS),
            Err(ShapeError::NotAnObject)
        );

        let mut bad_scripts = json!({ "scripts": "next" });
        assert_eq!(
            merge_scripts(&mut bad_scripts, DEFAULTS),
            Err(ShapeError::ScriptsNotAnObject)
        );
    }

    #[test]
    fn test_merge_treats_null_scripts_as_missing() {
        let mut manifest = json!({ "name": "app", "scripts": null });
        let added = merge_scripts(&mut manifest, DEFAULTS).unwrap();

        assert_eq!(added, vec!["dev", "build", "start"]);
        assert_eq!(manifest["scripts"]["dev"], "next");
        let keys: Vec<&str> = manifest
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["name", "scripts"]);
    }

    #[tokio::test]
    async fn test_save_writes_pretty_json() {
        let dir = TempDir::new().unwrap();
        let path = manifest_path(dir.path());
        save(&path, &json!({ "name": "app" })).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "{\n  \"name\": \"app\"\n}\n"
        );
    }

    #[tokio::test]
    async fn test_merge_manifest_scripts_preserves_key_order() {
        let dir = TempDir::new().unwrap();
        let path = manifest_path(dir.path());
        std::fs::write(
            &path,
            r#"{"version":"1.0.0","name":"app","scripts":{"dev":"custom"},"license":"MIT"}"#,
        )
        .unwrap();

        let added = merge_manifest_scripts(dir.path(), DEFAULTS).await.unwrap();
        assert_eq!(added, vec!["build", "start"]);

        let content = std::fs::read_to_string(&path).unwrap();
        let expected = r#"{
  "version": "1.0.0",
  "name": "app",
  "scripts": {
    "dev": "custom",
    "build": "next build",
    "start": "next start"
  },
  "license": "MIT"
}
"#;
        assert_eq!(content, expected);
    }

    #[tokio::test]
    async fn test_merge_manifest_scripts_leaves_file_alone_when_complete() {
        let dir = TempDir::new().unwrap();
        let path = manifest_path(dir.path());
        let original = r#"{"scripts":{"dev":"a","build":"b","start":"c"}}"#;
        std::fs::write(&path, original).unwrap();

        let added = merge_manifest_scripts(dir.path(), DEFAULTS).await.unwrap();
        assert!(added.is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }

    #[tokio::test]
    async fn test_merge_manifest_scripts_malformed_json() {
        let dir = TempDir::new().unwrap();
        std::fs::write(manifest_path(dir.path()), "{ not json").unwrap();

        let err = merge_manifest_scripts(dir.path(), DEFAULTS)
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestParse { .. }));
    }

    #[tokio::test]
    async fn test_merge_manifest_scripts_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = merge_manifest_scripts(dir.path(), DEFAULTS)
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestMissing { .. }));
    }

    #[tokio::test]
    async fn test_merge_manifest_scripts_invalid_shape() {
        let dir = TempDir::new().unwrap();
        std::fs::write(manifest_path(dir.path()), r#"{"scripts":[]}"#).unwrap();

        let err = merge_manifest_scripts(dir.path(), DEFAULTS)
            .await
            .unwrap_err();
        match err {
            ScaffoldError::InvalidManifest { reason, .. } => {
                assert!(reason.contains("scripts"));
            }
            other => panic!("Expected InvalidManifest, got {:?}", other),
        }
    }
}
