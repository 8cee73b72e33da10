//! Store file I/O service.
//!
//! The store is persisted as a snapshot envelope (see [`snapshot`](super::snapshot)),
//! so the data file doubles as an export that can be imported elsewhere.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::models::Application;
use crate::services::snapshot::{self, ExportOptions};
use crate::store::ShortcutStore;

/// Service for loading and saving the shortcut store.
pub struct StoreFileService;

impl StoreFileService {
    /// Loads a store from `path`.
    ///
    /// A missing file yields an empty store so a first run needs no setup.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use shortkeys::services::StoreFileService;
    ///
    /// let store = StoreFileService::load(Path::new("shortcuts.json"))?;
    /// println!("{} applications", store.applications().len());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<ShortcutStore> {
        if !path.exists() {
            info!("No store file at {}, starting empty", path.display());
            return Ok(ShortcutStore::new());
        }

        let apps = Self::read_snapshot(path)?;
        let store = ShortcutStore::with_applications(apps)
            .with_context(|| format!("Invalid store file {}", path.display()))?;
        info!(
            "Loaded {} applications from {}",
            store.applications().len(),
            path.display()
        );
        Ok(store)
    }

    /// Reads and validates a snapshot file without touching any store.
    pub fn read_snapshot(path: &Path) -> Result<Vec<Application>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        snapshot::import_snapshot(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Saves the store to `path`.
    ///
    /// Writes a temp file next to the target and renames it over the target,
    /// so the data file is never left half-written.
    pub fn save(store: &ShortcutStore, path: &Path, options: ExportOptions) -> Result<()> {
        let content = snapshot::export_snapshot_with(store.applications(), None, options)
            .context("Failed to serialize store")?;
        write_atomic(path, &content)?;
        info!(
            "Saved {} applications to {}",
            store.applications().len(),
            path.display()
        );
        Ok(())
    }
}

/// Writes `content` to `path` through a temp file + rename.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = std::path::PathBuf::from(temp_name);

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write temp file {}", temp_path.display()))?;
    fs::rename(&temp_path, path).with_context(|| {
        format!(
            "Failed to rename {} to {}",
            temp_path.display(),
            path.display()
        )
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = StoreFileService::load(&dir.path().join("none.json")).unwrap();
        assert!(store.applications().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("shortcuts.json");

        let mut store = ShortcutStore::new();
        store.add_application("VS Code", "code.exe").unwrap();
        store.start_new_shortcut("code.exe").unwrap();
        store.update_shortcut_name("Command Palette");
        store.update_shortcut_keys("Ctrl+Shift+P".parse().unwrap());
        store.save_shortcut().unwrap();

        StoreFileService::save(&store, &path, ExportOptions::default()).unwrap();
        assert!(!path.with_extension("json.tmp").exists());

        let loaded = StoreFileService::load(&path).unwrap();
        assert_eq!(loaded.applications(), store.applications());
    }

    #[test]
    fn test_load_rejects_bad_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"version":"0.9","apps":[]}"#).unwrap();

        let err = StoreFileService::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("unsupported snapshot version"));
    }
}
