//! Shortcut management commands.
//!
//! Every edit goes through the store's editing session: the command opens a
//! session, applies the given fields to the draft and saves it, exactly as an
//! interactive editor would.

use crate::cli::common::{print_json, CliError, CliResult, OpenStore, StoreArgs};
use crate::models::{Shortcut, ShortcutMapping};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Manage shortcuts of an application
#[derive(Debug, Clone, Args)]
pub struct ShortcutArgs {
    /// Shortcut subcommand
    #[command(subcommand)]
    pub command: ShortcutCommand,
}

/// Shortcut management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ShortcutCommand {
    /// List the shortcuts of an application
    List(ListShortcutsArgs),
    /// Add a new shortcut
    Add(AddShortcutArgs),
    /// Edit an existing shortcut
    Edit(EditShortcutArgs),
    /// Remove the key combination but keep the shortcut entry
    Unbind(TargetShortcutArgs),
    /// Remove a shortcut entirely
    Delete(TargetShortcutArgs),
}

/// List the shortcuts of an application
#[derive(Debug, Clone, Args)]
pub struct ListShortcutsArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Process name of the application
    #[arg(long, value_name = "PROCESS")]
    pub app: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Add a new shortcut
#[derive(Debug, Clone, Args)]
pub struct AddShortcutArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Process name of the application
    #[arg(long, value_name = "PROCESS")]
    pub app: String,

    /// Friendly name (e.g., "Command Palette")
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Key combination (e.g., "Ctrl+Shift+P")
    #[arg(long, value_name = "KEYS")]
    pub keys: String,

    /// Extra data as JSON
    #[arg(long, value_name = "JSON")]
    pub extra: Option<String>,
}

/// Edit an existing shortcut
#[derive(Debug, Clone, Args)]
pub struct EditShortcutArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Process name of the application
    #[arg(long, value_name = "PROCESS")]
    pub app: String,

    /// Shortcut id
    #[arg(long, value_name = "ID")]
    pub id: String,

    /// New friendly name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// New key combination (e.g., "Ctrl+Alt+P")
    #[arg(long, value_name = "KEYS")]
    pub keys: Option<String>,

    /// New extra data as JSON (empty string clears it)
    #[arg(long, value_name = "JSON")]
    pub extra: Option<String>,
}

/// Identify one shortcut
#[derive(Debug, Clone, Args)]
pub struct TargetShortcutArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Process name of the application
    #[arg(long, value_name = "PROCESS")]
    pub app: String,

    /// Shortcut id
    #[arg(long, value_name = "ID")]
    pub id: String,
}

// JSON response types
#[derive(Debug, Serialize)]
struct ShortcutItem {
    id: String,
    keys: Option<String>,
    friendly_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    extra_data: Option<String>,
}

#[derive(Debug, Serialize)]
struct ListShortcutsResponse {
    app: String,
    shortcuts: Vec<ShortcutItem>,
    count: usize,
}

impl ShortcutArgs {
    /// Execute the shortcut command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ShortcutCommand::List(args) => args.execute(),
            ShortcutCommand::Add(args) => args.execute(),
            ShortcutCommand::Edit(args) => args.execute(),
            ShortcutCommand::Unbind(args) => args.unbind(),
            ShortcutCommand::Delete(args) => args.delete(),
        }
    }
}

/// Parses user-entered keys into a shortcut.
fn parse_keys(keys: &str) -> CliResult<Shortcut> {
    keys.parse::<Shortcut>()
        .map_err(|e| CliError::validation(format!("Invalid key combination '{keys}': {e}")))
}

/// Saves the open session, discarding it on failure so nothing half-edited
/// lingers in memory.
fn save_session(open: &mut OpenStore) -> CliResult<ShortcutMapping> {
    match open.store.save_shortcut() {
        Ok(mapping) => Ok(mapping),
        Err(e) => {
            open.store.cancel_editing();
            Err(e.into())
        }
    }
}

impl ListShortcutsArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let open = self.store.open()?;
        let app = open
            .store
            .application(&self.app)
            .ok_or_else(|| CliError::validation(format!("Application '{}' not found", self.app)))?;

        let shortcuts: Vec<ShortcutItem> = app
            .shortcuts
            .iter()
            .map(|s| ShortcutItem {
                id: s.id.clone(),
                keys: s.shortcut.as_ref().map(ToString::to_string),
                friendly_name: s.friendly_name.clone(),
                extra_data: s.extra_data.clone(),
            })
            .collect();

        let response = ListShortcutsResponse {
            app: app.process_name.clone(),
            count: shortcuts.len(),
            shortcuts,
        };

        if self.json {
            print_json(&response)?;
        } else if response.count == 0 {
            println!("No shortcuts defined for {}.", app.name);
        } else {
            println!("{} ({}):", app.name, response.count);
            println!();
            for item in response.shortcuts {
                println!(
                    "  {:<38} {:<24} {}",
                    item.id,
                    item.keys.as_deref().unwrap_or("(unbound)"),
                    item.friendly_name
                );
            }
        }

        Ok(())
    }
}

impl AddShortcutArgs {
    /// Execute the add command
    pub fn execute(&self) -> CliResult<()> {
        let shortcut = parse_keys(&self.keys)?;
        let mut open = self.store.open()?;

        open.store.start_new_shortcut(&self.app)?;
        open.store.update_shortcut_name(&self.name);
        open.store.update_shortcut_keys(shortcut);
        if let Some(extra) = &self.extra {
            open.store.update_shortcut_extra_data(extra);
        }

        let mapping = save_session(&mut open)?;
        open.save()?;

        println!("Shortcut '{}' added with id {}.", mapping.friendly_name, mapping.id);
        Ok(())
    }
}

impl EditShortcutArgs {
    /// Execute the edit command
    pub fn execute(&self) -> CliResult<()> {
        if self.name.is_none() && self.keys.is_none() && self.extra.is_none() {
            return Err(CliError::validation(
                "At least one of --name, --keys or --extra must be specified",
            ));
        }

        let shortcut = self.keys.as_deref().map(parse_keys).transpose()?;
        let mut open = self.store.open()?;

        open.store.start_editing(&self.id, &self.app)?;
        if let Some(name) = &self.name {
            open.store.update_shortcut_name(name);
        }
        if let Some(shortcut) = shortcut {
            open.store.update_shortcut_keys(shortcut);
        }
        if let Some(extra) = &self.extra {
            open.store.update_shortcut_extra_data(extra);
        }

        let mapping = save_session(&mut open)?;
        open.save()?;

        println!("Shortcut '{}' updated.", mapping.id);
        Ok(())
    }
}

impl TargetShortcutArgs {
    /// Execute the unbind command
    pub fn unbind(&self) -> CliResult<()> {
        let mut open = self.store.open()?;
        open.store.unbind_shortcut(&self.id, &self.app)?;
        open.save()?;
        println!("Shortcut '{}' unbound.", self.id);
        Ok(())
    }

    /// Execute the delete command
    pub fn delete(&self) -> CliResult<()> {
        let mut open = self.store.open()?;
        open.store.delete_shortcut(&self.id, &self.app)?;
        open.save()?;
        println!("Shortcut '{}' deleted.", self.id);
        Ok(())
    }
}
