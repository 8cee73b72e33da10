//! Application management commands.
//!
//! Provides commands to list, add, rename, and delete applications.

use crate::cli::common::{print_json, CliResult, StoreArgs};
use crate::constants::APP_BINARY_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Manage applications
#[derive(Debug, Clone, Args)]
pub struct AppArgs {
    /// Application subcommand
    #[command(subcommand)]
    pub command: AppCommand,
}

/// Application management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum AppCommand {
    /// List all applications
    List(ListAppsArgs),
    /// Add a new application
    Add(AddAppArgs),
    /// Change an application's display name
    Rename(RenameAppArgs),
    /// Remove an application and all of its shortcuts
    Delete(DeleteAppArgs),
}

/// List all applications
#[derive(Debug, Clone, Args)]
pub struct ListAppsArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Add a new application
#[derive(Debug, Clone, Args)]
pub struct AddAppArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Display name (e.g., "Visual Studio Code")
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Process name (e.g., "code.exe"), stored lowercase
    #[arg(long, value_name = "PROCESS")]
    pub process: String,
}

/// Change an application's display name
#[derive(Debug, Clone, Args)]
pub struct RenameAppArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Process name of the application
    #[arg(long, value_name = "PROCESS")]
    pub process: String,

    /// New display name
    #[arg(long, value_name = "NAME")]
    pub name: String,
}

/// Remove an application
#[derive(Debug, Clone, Args)]
pub struct DeleteAppArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Process name of the application
    #[arg(long, value_name = "PROCESS")]
    pub process: String,
}

// JSON response types
#[derive(Debug, Serialize)]
struct AppItem {
    process_name: String,
    name: String,
    shortcuts: usize,
    bound: usize,
}

#[derive(Debug, Serialize)]
struct ListAppsResponse {
    apps: Vec<AppItem>,
    count: usize,
}

impl AppArgs {
    /// Execute the app command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            AppCommand::List(args) => args.execute(),
            AppCommand::Add(args) => args.execute(),
            AppCommand::Rename(args) => args.execute(),
            AppCommand::Delete(args) => args.execute(),
        }
    }
}

impl ListAppsArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let open = self.store.open()?;

        let apps: Vec<AppItem> = open
            .store
            .applications()
            .iter()
            .map(|app| AppItem {
                process_name: app.process_name.clone(),
                name: app.name.clone(),
                shortcuts: app.shortcuts.len(),
                bound: app.bound_count(),
            })
            .collect();

        let response = ListAppsResponse {
            count: apps.len(),
            apps,
        };

        if self.json {
            print_json(&response)?;
        } else if response.count == 0 {
            println!("No applications defined.");
            println!();
            println!("Add one with:");
            println!("  {} app add --name <NAME> --process <PROCESS>", APP_BINARY_NAME);
        } else {
            println!("Applications ({}):", response.count);
            println!();
            for app in response.apps {
                println!(
                    "  {:<24} {:<30} {} shortcuts ({} bound)",
                    app.process_name, app.name, app.shortcuts, app.bound
                );
            }
        }

        Ok(())
    }
}

impl AddAppArgs {
    /// Execute the add command
    pub fn execute(&self) -> CliResult<()> {
        let mut open = self.store.open()?;

        let process_name = open
            .store
            .add_application(&self.name, &self.process)?
            .process_name
            .clone();

        open.save()?;
        println!("Application '{}' added successfully.", process_name);
        Ok(())
    }
}

impl RenameAppArgs {
    /// Execute the rename command
    pub fn execute(&self) -> CliResult<()> {
        let mut open = self.store.open()?;
        open.store.rename_application(&self.process, &self.name)?;
        open.save()?;
        println!("Application '{}' renamed to '{}'.", self.process, self.name.trim());
        Ok(())
    }
}

impl DeleteAppArgs {
    /// Execute the delete command
    pub fn execute(&self) -> CliResult<()> {
        let mut open = self.store.open()?;

        // Deleting twice is not an error
        if !open.store.delete_application(&self.process) {
            println!("Application '{}' not found; nothing deleted.", self.process);
            return Ok(());
        }

        open.save()?;
        println!("Application '{}' deleted successfully.", self.process);
        Ok(())
    }
}
