//! Project directory layout

use crate::error::{Result, ScaffoldError};
use std::path::Path;
use tokio::fs;

/// Create each directory under `root` if it is missing.
///
/// Existing directories are left alone. Returns the names that were newly
/// created.
pub async fn ensure_directories(root: &Path, dirs: &[&str]) -> Result<Vec<String>> {
    let mut created = Vec::new();

    for dir in dirs {
        let path = root.join(dir);
        if path.is_dir() {
            continue;
        }

        fs::create_dir_all(&path)
            .await
            .map_err(|e| ScaffoldError::io(&path, e))?;
        created.push(dir.to_string());
    }

    Ok(created)
}
