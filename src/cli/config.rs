//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Clone)]
pub struct ConfigSetArgs {
    /// Shortcut data file used when --store is not given
    #[arg(long, value_name = "FILE")]
    store_path: Option<PathBuf>,

    /// Indent exported JSON (true or false)
    #[arg(long, value_name = "BOOL")]
    pretty_export: Option<bool>,

    /// File name stem for generated export names
    #[arg(long, value_name = "STEM")]
    file_stem: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    paths: PathsOutput,
    export: ExportOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    store_file: String,
}

#[derive(Serialize, Debug)]
struct ExportOutput {
    pretty: bool,
    file_stem: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;
        let output = build_output(&config)?;

        if self.json {
            let json = serde_json::to_string_pretty(&output).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {e}"))
            })?;
            println!("{json}");
        } else {
            println!("{} configuration ({}):", APP_NAME, output.config_file);
            println!();
            println!("  Store file:   {}", output.paths.store_file);
            println!("  Pretty JSON:  {}", output.export.pretty);
            println!("  Export stem:  {}", output.export.file_stem);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.store_path.is_none() && self.pretty_export.is_none() && self.file_stem.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --store-path, --pretty-export, or --file-stem",
            ));
        }

        let mut config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;

        if let Some(path) = &self.store_path {
            if path.is_dir() {
                return Err(CliError::validation(format!(
                    "Store path is a directory: {}",
                    path.display()
                )));
            }
            config.paths.store_file = Some(path.clone());
        }

        if let Some(pretty) = self.pretty_export {
            config.export.pretty = pretty;
        }

        if let Some(stem) = &self.file_stem {
            config.export.file_stem = stem.trim().to_string();
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

fn build_output(config: &Config) -> CliResult<ConfigOutput> {
    let config_file = Config::config_file_path()
        .map_err(|e| CliError::io(format!("Failed to resolve config directory: {e}")))?;
    let store_file = config
        .store_path()
        .map_err(|e| CliError::io(format!("Failed to resolve store path: {e}")))?;

    Ok(ConfigOutput {
        config_file: config_file.to_string_lossy().to_string(),
        paths: PathsOutput {
            store_file: store_file.to_string_lossy().to_string(),
        },
        export: ExportOutput {
            pretty: config.export.pretty,
            file_stem: config.export.file_stem.clone(),
        },
    })
}
