//! Sheet document file I/O
//!
//! Documents are stored as TOML (`.toml`) or JSON (anything else).

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use fs2::FileExt;

use super::SheetDocument;

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("toml"))
}

impl SheetDocument {
    /// Load a document from a TOML or JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read sheet document: {}", path.display()))?;

        let document: SheetDocument = if is_toml(path) {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse sheet document: {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse sheet document: {}", path.display()))?
        };

        tracing::debug!(
            "Loaded {} sheets and {} sheet sets from {}",
            document.sheets.len(),
            document.sheet_sets.len(),
            path.display()
        );

        Ok(document)
    }

    /// Save the document with a lock file and an atomic rename
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create document directory: {}", parent.display())
            })?;
        }

        let content = if is_toml(path) {
            toml::to_string_pretty(self).with_context(|| "Failed to serialize sheet document")?
        } else {
            serde_json::to_string_pretty(self)
                .with_context(|| "Failed to serialize sheet document")?
        };

        let lock_path = path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

        lock_file
            .lock_exclusive()
            .with_context(|| "Failed to acquire document lock")?;

        let temp_path = path.with_extension("tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        temp_file
            .write_all(content.as_bytes())
            .with_context(|| "Failed to write sheet document")?;

        temp_file
            .sync_all()
            .with_context(|| "Failed to sync sheet document")?;

        std::fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename sheet document: {}", path.display()))?;

        drop(lock_file);
        let _ = std::fs::remove_file(&lock_path);

        Ok(())
    }
}
