//! Data models for applications, shortcut mappings and key combinations.
//!
//! Models are plain values, independent of storage and presentation.

pub mod application;
pub mod shortcut;

// Re-export all model types
pub use application::{Application, ShortcutMapping};
pub use shortcut::{canonical_key_label, canonical_label, ModifierKey, ModifierSet, Shortcut, ShortcutParseError};
