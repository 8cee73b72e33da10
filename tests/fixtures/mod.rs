//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use shortkeys::models::{Application, ShortcutMapping};
use shortkeys::services::export_snapshot;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the shortkeys binary (set by cargo at compile time)
pub fn shortkeys_bin() -> &'static str {
    env!("CARGO_BIN_EXE_shortkeys")
}

/// Command for the shortkeys binary with its config directory isolated
/// inside `temp_dir`, so tests never read or write the user's config.
pub fn shortkeys(temp_dir: &TempDir) -> Command {
    let mut command = Command::new(shortkeys_bin());
    command
        .env("SHORTKEYS_CONFIG_DIR", temp_dir.path().join("config"))
        .env_remove("RUST_LOG");
    command
}

/// Runs shortkeys with `args` plus `--store <store>`.
pub fn run_with_store(temp_dir: &TempDir, store: &Path, args: &[&str]) -> Output {
    shortkeys(temp_dir)
        .args(args)
        .args(["--store", store.to_str().unwrap()])
        .output()
        .expect("Failed to execute command")
}

/// Two applications with bound, unbound and extra-data mappings.
///
/// - `code.exe`: Ctrl+Shift+P, Ctrl+B (extra data), unbound "Zen Mode"
/// - `chrome.exe`: Ctrl+T, Ctrl+Shift+T
pub fn sample_apps() -> Vec<Application> {
    let zen = ShortcutMapping::new("vs-3", "Ctrl+K".parse().unwrap(), "Zen Mode").unbound();

    vec![
        Application::new("VS Code", "code.exe")
            .with_shortcut(ShortcutMapping::new(
                "vs-1",
                "Ctrl+Shift+P".parse().unwrap(),
                "Command Palette",
            ))
            .with_shortcut(
                ShortcutMapping::new("vs-2", "Ctrl+B".parse().unwrap(), "Toggle Sidebar")
                    .with_extra_data(r#"{"panel":"left"}"#),
            )
            .with_shortcut(zen),
        Application::new("Chrome", "chrome.exe")
            .with_shortcut(ShortcutMapping::new(
                "ch-1",
                "Ctrl+T".parse().unwrap(),
                "New Tab",
            ))
            .with_shortcut(ShortcutMapping::new(
                "ch-2",
                "Ctrl+Shift+T".parse().unwrap(),
                "Reopen Closed Tab",
            )),
    ]
}

/// Writes `apps` as a snapshot file in a fresh temp directory.
///
/// Returns the file path and the directory guard; keep the guard alive for
/// the duration of the test.
pub fn create_temp_store_file(apps: &[Application]) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("shortcuts.json");
    fs::write(&path, export_snapshot(apps, None).unwrap()).expect("Failed to write store file");
    (path, temp_dir)
}

/// Store path inside a fresh temp directory, with no file created yet.
pub fn empty_store_path() -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("shortcuts.json");
    (path, temp_dir)
}

/// Reads a store file back through the library.
pub fn read_store(path: &Path) -> Vec<Application> {
    shortkeys::services::StoreFileService::read_snapshot(path).expect("Store file should parse")
}

/// Stdout as a string.
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as a string.
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
