//! CLI command handlers for Shortkeys.
//!
//! Each subcommand loads the store file, performs one operation and writes
//! the file back, so every command is scriptable and testable end to end.

pub mod app;
pub mod common;
pub mod config;
pub mod export;
pub mod import;
pub mod keyboard;
pub mod keys;
pub mod record;
pub mod shortcut;

// Re-export types used by main.rs and tests
pub use app::AppArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use export::ExportArgs;
pub use import::ImportArgs;
pub use keyboard::KeyboardArgs;
pub use keys::KeysArgs;
pub use record::RecordArgs;
pub use shortcut::ShortcutArgs;
