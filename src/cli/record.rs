//! Record command: captures one shortcut from the terminal.

use crate::capture::terminal::record_shortcut;
use crate::cli::common::{print_json, CliError, CliResult};
use clap::Args;
use serde::Serialize;
use std::io::IsTerminal;

/// Press a key combination and print its canonical form
#[derive(Debug, Clone, Args)]
pub struct RecordArgs {
    /// Output result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct RecordResponse {
    keys: String,
    modifiers: Vec<String>,
    key: String,
}

impl RecordArgs {
    /// Execute the record command
    pub fn execute(&self) -> CliResult<()> {
        if !std::io::stdin().is_terminal() {
            return Err(CliError::io("Recording needs an interactive terminal"));
        }

        eprintln!("Press a key combination (Esc to cancel)...");
        let recorded = record_shortcut()
            .map_err(|e| CliError::io(format!("Failed to record shortcut: {e:#}")))?;

        let Some(shortcut) = recorded else {
            eprintln!("Recording cancelled.");
            return Ok(());
        };

        if self.json {
            print_json(&RecordResponse {
                keys: shortcut.to_string(),
                modifiers: shortcut.modifiers().iter().map(|m| m.to_string()).collect(),
                key: shortcut.key().to_string(),
            })?;
        } else {
            println!("{shortcut}");
        }
        Ok(())
    }
}
