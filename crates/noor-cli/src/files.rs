//! Writing quotes into markdown files on disk.

use anyhow::{Context, Result};
use noor_core::editor::append_in_new_line;
use std::path::Path;
use tokio::fs;

/// Append `quote` to the end of `path`, starting a new line when the file does
/// not end at the start of one. Missing files are created.
pub async fn insert_into_file(path: &Path, quote: &str) -> Result<()> {
    let document = match fs::read_to_string(path).await {
        Ok(document) => document,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    let updated = append_in_new_line(&document, quote);
    write_creating_parents(path, &updated).await
}

/// Replace `path` with `content`, creating its parent directories.
pub async fn replace_file(path: &Path, content: &str) -> Result<()> {
    if fs::try_exists(path).await.unwrap_or(false) {
        fs::remove_file(path)
            .await
            .with_context(|| format!("Failed to remove old {}", path.display()))?;
    }
    write_creating_parents(path, content).await
}

async fn write_creating_parents(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}
