//! File system helpers for writing recipes.
//!
//! Writes go through a temp file in the destination directory followed by a rename,
//! so an interrupted run never leaves a half-written recipe behind.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Create `path` and its parents if missing.
///
/// # Errors
///
/// Fails if the directory cannot be created or `path` exists but is not a directory.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    match fs::metadata(path).await {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(anyhow::anyhow!("Path exists but is not a directory: {}", path.display())),
        Err(_) => fs::create_dir_all(path).await.with_context(|| {
            format!(
                "Failed to create directory: {}\n\nCheck directory permissions and path validity",
                path.display()
            )
        }),
    }
}

/// Write `content` to `path` atomically, creating parent directories as needed.
pub async fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent).await?;
    }

    let temp_path = path.with_extension("tmp");

    fs::write(&temp_path, content)
        .await
        .with_context(|| format!("Failed to write to temp file: {}", temp_path.display()))?;

    fs::rename(&temp_path, path)
        .await
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}
