//! Shortkeys Library
//!
//! Core functionality for the Shortkeys shortcut manager: the per-application
//! shortcut store with its editing session, key lookup, snapshot
//! import/export, key capture and the virtual keyboard renderer.

// Module declarations
pub mod capture;
pub mod cli;
pub mod config;
pub mod constants;
pub mod keyboard;
pub mod models;
pub mod services;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use models::{Application, ModifierKey, Shortcut, ShortcutMapping};
pub use store::{ShortcutStore, StoreError};
