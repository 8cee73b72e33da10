//! Export command for writing a snapshot of the store.

use crate::cli::common::{CliError, CliResult, StoreArgs};
use crate::config::ExportConfig;
use crate::services::snapshot::export_snapshot_with;
use crate::store::normalize_process_name;
use crate::services::store_file::write_atomic;
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Export applications to a snapshot file
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Output file, or a directory to place [stem]_export_[date].json in
    /// (prints to stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Only export these applications (repeatable)
    #[arg(long = "app", value_name = "PROCESS")]
    pub apps: Vec<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let open = self.store.open()?;
        let apps = open.store.applications();

        let subset: Vec<String> = self.apps.iter().map(|p| normalize_process_name(p)).collect();
        for name in &subset {
            if open.store.application(name).is_none() {
                warn!("Application '{}' not found, skipping", name);
            }
        }
        let subset = (!subset.is_empty()).then_some(subset.as_slice());

        let content = export_snapshot_with(apps, subset, open.config.export.options())?;

        let Some(output) = &self.output else {
            println!("{content}");
            return Ok(());
        };

        let output_path = Self::output_path(output, &open.config.export);
        write_atomic(&output_path, &content)
            .map_err(|e| CliError::io(format!("Failed to write output file: {e:#}")))?;

        info!("Exported snapshot to {}", output_path.display());
        println!("Exported shortcuts to: {}", output_path.display());
        Ok(())
    }

    /// Resolves the output path, generating a file name for directory targets.
    fn output_path(output: &Path, export: &ExportConfig) -> PathBuf {
        if output.is_dir() {
            output.join(export.default_file_name())
        } else {
            output.to_path_buf()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_path_custom_file() {
        let path = PathBuf::from("/tmp/my_export.json");
        assert_eq!(ExportArgs::output_path(&path, &ExportConfig::default()), path);
    }

    #[test]
    fn test_output_path_directory_gets_generated_name() {
        let dir = TempDir::new().unwrap();
        let path = ExportArgs::output_path(dir.path(), &ExportConfig::default());

        assert_eq!(path.parent(), Some(dir.path()));
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("shortcuts_export_"));
        assert!(name.ends_with(".json"));
    }
}
