//! Import command: replaces the store with a snapshot's applications.

use crate::cli::common::{CliError, CliResult, StoreArgs};
use crate::services::StoreFileService;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Replace all applications with those from a snapshot file
#[derive(Debug, Clone, Args)]
pub struct ImportArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Snapshot file to import
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

impl ImportArgs {
    /// Execute the import command
    pub fn execute(&self) -> CliResult<()> {
        if !self.file.exists() {
            return Err(CliError::io(format!(
                "Import file not found: {}",
                self.file.display()
            )));
        }

        // Parse and validate before the store is touched
        let apps = StoreFileService::read_snapshot(&self.file)
            .map_err(|e| CliError::io(format!("Import failed: {e:#}")))?;

        let mut open = self.store.open()?;
        let count = apps.len();
        open.store.replace_applications(apps)?;
        open.save()?;

        info!("Imported {} applications from {}", count, self.file.display());
        println!(
            "Imported {} application(s) from {}.",
            count,
            self.file.display()
        );
        Ok(())
    }
}
