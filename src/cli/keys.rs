//! Key lookup commands.

use crate::cli::common::{print_json, CliError, CliResult, StoreArgs};
use crate::models::canonical_label;
use crate::services::find_bindings_for_key;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Query which shortcuts use a key
#[derive(Debug, Clone, Args)]
pub struct KeysArgs {
    /// Keys subcommand
    #[command(subcommand)]
    pub command: KeysCommand,
}

/// Key lookup subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum KeysCommand {
    /// Find every shortcut whose combination includes a key
    Find(FindKeyArgs),
}

/// Find every shortcut whose combination includes a key
#[derive(Debug, Clone, Args)]
pub struct FindKeyArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Key label (e.g., "P", "Ctrl", "F5")
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct BindingItem {
    app: String,
    app_name: String,
    id: String,
    keys: String,
    friendly_name: String,
}

#[derive(Debug, Serialize)]
struct FindKeyResponse {
    key: String,
    bindings: Vec<BindingItem>,
    count: usize,
}

impl KeysArgs {
    /// Execute the keys command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            KeysCommand::Find(args) => args.execute(),
        }
    }
}

impl FindKeyArgs {
    /// Execute the find command
    pub fn execute(&self) -> CliResult<()> {
        let key = canonical_label(&self.key);
        if key.is_empty() {
            return Err(CliError::validation("Key cannot be empty"));
        }

        let open = self.store.open()?;
        let bindings: Vec<BindingItem> = find_bindings_for_key(open.store.applications(), &key)
            .into_iter()
            .map(|b| BindingItem {
                app: b.app_process_name,
                app_name: b.app_name,
                id: b.binding_id,
                keys: b.shortcut.to_string(),
                friendly_name: b.friendly_name,
            })
            .collect();

        let response = FindKeyResponse {
            key,
            count: bindings.len(),
            bindings,
        };

        if self.json {
            print_json(&response)?;
        } else if response.count == 0 {
            println!("No shortcuts use {}.", response.key);
        } else {
            println!("Shortcuts using {} ({}):", response.key, response.count);
            println!();
            for item in response.bindings {
                println!(
                    "  {:<24} {:<24} {}",
                    item.app_name, item.keys, item.friendly_name
                );
            }
        }

        Ok(())
    }
}
