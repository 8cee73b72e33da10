//! User configuration stored as `config.toml` in the platform config
//! directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{APP_DIR_NAME, CONFIG_DIR_ENV};
use crate::services::store_file::write_atomic;
use crate::services::ExportOptions;

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Shortcut data file (defaults to `shortcuts.json` in the config directory)
    pub store_file: Option<PathBuf>,
}

/// Export preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Indent exported JSON
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// File name stem for generated export names
    #[serde(default = "default_file_stem")]
    pub file_stem: String,
}

fn default_pretty() -> bool {
    true
}

fn default_file_stem() -> String {
    "shortcuts".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            file_stem: default_file_stem(),
        }
    }
}

impl ExportConfig {
    /// Snapshot formatting derived from these preferences.
    #[must_use]
    pub const fn options(&self) -> ExportOptions {
        ExportOptions {
            pretty: self.pretty,
        }
    }

    /// Generated export file name: `<stem>_export_<YYYY-MM-DD>.json`.
    #[must_use]
    pub fn default_file_name(&self) -> PathBuf {
        let date = chrono::Local::now().format("%Y-%m-%d");
        PathBuf::from(format!("{}_export_{}.json", self.file_stem, date))
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Shortkeys/config.toml`
/// - macOS: `~/Library/Application Support/Shortkeys/config.toml`
/// - Windows: `%APPDATA%\Shortkeys\config.toml`
///
/// The directory can be overridden with `SHORTKEYS_CONFIG_DIR`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Data file location
    #[serde(default)]
    pub paths: PathConfig,
    /// Export preferences
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config directory, or `SHORTKEYS_CONFIG_DIR` when set.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .context("No platform config directory")
    }

    /// `<config dir>/config.toml`.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Resolves the shortcut data file.
    pub fn store_path(&self) -> Result<PathBuf> {
        match &self.paths.store_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("shortcuts.json")),
        }
    }

    /// Reads `config.toml`, falling back to defaults when there is none.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        let config: Self =
            toml::from_str(&text).with_context(|| format!("Invalid TOML in {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validates, then writes `config.toml` atomically.
    pub fn save(&self) -> Result<()> {
        self.validate()?;
        let text = toml::to_string_pretty(self).context("Cannot encode configuration as TOML")?;
        write_atomic(&Self::config_file_path()?, &text)
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `store_file`, if set, is not an existing directory
    /// - `file_stem` is non-empty and contains no path separators
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.paths.store_file {
            if path.is_dir() {
                anyhow::bail!("Store file path is a directory: {}", path.display());
            }
        }

        let stem = self.export.file_stem.trim();
        if stem.is_empty() {
            anyhow::bail!("Export file stem cannot be empty");
        }
        if stem.contains(['/', '\\']) {
            anyhow::bail!("Export file stem '{stem}' must not contain path separators");
        }

        Ok(())
    }
}
