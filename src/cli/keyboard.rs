//! Virtual keyboard command.

use crate::cli::common::{CliResult, StoreArgs};
use crate::keyboard::{highlights_from_index, layout, render_keyboard, ISO_105};
use crate::models::canonical_label;
use crate::services::KeyIndex;
use clap::Args;

/// Draw the keyboard with bound keys highlighted
#[derive(Debug, Clone, Args)]
pub struct KeyboardArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Select a key and list the shortcuts that use it
    #[arg(long, value_name = "KEY")]
    pub key: Option<String>,
}

impl KeyboardArgs {
    /// Execute the keyboard command
    pub fn execute(&self) -> CliResult<()> {
        let open = self.store.open()?;
        let index = KeyIndex::build(open.store.applications());
        let selected = self.key.as_deref().map(canonical_label);

        let highlights = highlights_from_index(&index, selected.as_deref());
        print!("{}", render_keyboard(ISO_105, &highlights));
        println!();
        println!("Double border: key used by a shortcut. Heavy border: selected key.");

        let Some(key) = selected else {
            return Ok(());
        };

        println!();
        if !layout::contains_label(ISO_105, &key) {
            println!("{key} is not on this keyboard.");
        }

        let bindings = index.get(&key);
        if bindings.is_empty() {
            println!("No shortcuts use {key}.");
        } else {
            println!("Shortcuts using {} ({}):", key, bindings.len());
            for binding in bindings {
                println!(
                    "  {:<24} {:<24} {}",
                    binding.app_name,
                    binding.shortcut.to_string(),
                    binding.friendly_name
                );
            }
        }

        Ok(())
    }
}
