//! Shortkeys - terminal keyboard-shortcut manager
//!
//! Keeps a per-application catalogue of keyboard shortcuts in a JSON data
//! file, answers "what is bound to this key", draws a keyboard with bound
//! keys highlighted and imports/exports the catalogue.
//!
//! # Usage
//!
//! ```bash
//! shortkeys app add --name "VS Code" --process code.exe
//! shortkeys shortcut add --app code.exe --name "Command Palette" --keys "Ctrl+Shift+P"
//! shortkeys keys find Ctrl
//! shortkeys keyboard --key P
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shortkeys::cli::{
    AppArgs, CliResult, ConfigArgs, ExportArgs, ImportArgs, KeyboardArgs, KeysArgs, RecordArgs,
    ShortcutArgs,
};

/// Shortkeys - manage keyboard shortcuts per application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage applications
    App(AppArgs),
    /// Manage shortcuts of an application
    Shortcut(ShortcutArgs),
    /// Query which shortcuts use a key
    Keys(KeysArgs),
    /// Draw the keyboard with bound keys highlighted
    Keyboard(KeyboardArgs),
    /// Export applications to a snapshot file
    Export(ExportArgs),
    /// Replace all applications with those from a snapshot file
    Import(ImportArgs),
    /// Press a key combination and print its canonical form
    Record(RecordArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::App(args) => args.execute(),
            Self::Shortcut(args) => args.execute(),
            Self::Keys(args) => args.execute(),
            Self::Keyboard(args) => args.execute(),
            Self::Export(args) => args.execute(),
            Self::Import(args) => args.execute(),
            Self::Record(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for command output
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code.code());
    }
}
