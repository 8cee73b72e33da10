//! Shared CLI plumbing: error type, exit codes and store access.

use crate::config::Config;
use crate::services::{SnapshotError, StoreFileService};
use crate::store::{ShortcutStore, StoreError};
use clap::Args;
use std::fmt;
use std::path::PathBuf;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Input was rejected (validation, duplicate, not found)
    ValidationError = 1,
    /// File could not be read, written or parsed
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error reported by a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code for the process
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Rejected input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// File or format failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<SnapshotError> for CliError {
    fn from(err: SnapshotError) -> Self {
        Self::io(err.to_string())
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Store file selection shared by every command that reads or writes shortcuts.
#[derive(Debug, Clone, Args)]
pub struct StoreArgs {
    /// Path to the shortcut data file (defaults to the configured store)
    #[arg(short, long, value_name = "FILE")]
    pub store: Option<PathBuf>,
}

/// A loaded store plus where it came from.
pub struct OpenStore {
    /// The loaded shortcuts
    pub store: ShortcutStore,
    /// File the store is saved back to
    pub path: PathBuf,
    /// Active configuration
    pub config: Config,
}

impl StoreArgs {
    /// Loads the configuration and the selected store file.
    pub fn open(&self) -> CliResult<OpenStore> {
        let config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;

        let path = match &self.store {
            Some(path) => path.clone(),
            None => config
                .store_path()
                .map_err(|e| CliError::io(format!("Failed to resolve store path: {e:#}")))?,
        };

        let store = StoreFileService::load(&path)
            .map_err(|e| CliError::io(format!("Failed to load store: {e:#}")))?;

        Ok(OpenStore {
            store,
            path,
            config,
        })
    }
}

impl OpenStore {
    /// Writes the store back to its file.
    pub fn save(&self) -> CliResult<()> {
        StoreFileService::save(&self.store, &self.path, self.config.export.options())
            .map_err(|e| CliError::io(format!("Failed to save store: {e:#}")))
    }
}

/// Prints `value` as one line of JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let text = serde_json::to_string(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{text}");
    Ok(())
}
