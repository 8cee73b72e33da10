//! Applications and the shortcut mappings they own.

use crate::models::Shortcut;
use serde::{Deserialize, Serialize};

/// A named binding between a friendly label and a key combination.
///
/// `shortcut` is `None` when the binding was explicitly unbound; the mapping
/// itself still exists until it is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutMapping {
    /// Identifier, unique within the owning application
    pub id: String,
    /// Bound key combination, or `None` when unbound
    #[serde(default)]
    pub shortcut: Option<Shortcut>,
    /// Human-readable action name (e.g., "Command Palette")
    pub friendly_name: String,
    /// Free-form JSON attached to the binding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_data: Option<String>,
}

impl ShortcutMapping {
    /// Creates a bound mapping without extra data.
    pub fn new(id: impl Into<String>, shortcut: Shortcut, friendly_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            shortcut: Some(shortcut),
            friendly_name: friendly_name.into(),
            extra_data: None,
        }
    }

    /// Attaches extra data (builder pattern).
    #[must_use]
    pub fn with_extra_data(mut self, extra_data: impl Into<String>) -> Self {
        self.extra_data = Some(extra_data.into());
        self
    }

    /// True when a key combination is assigned.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.shortcut.is_some()
    }

    /// Copy of this mapping with the key combination removed.
    #[must_use]
    pub fn unbound(&self) -> Self {
        Self {
            shortcut: None,
            ..self.clone()
        }
    }
}

/// An external program, keyed by its process name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Process identifier (e.g., "code.exe"); stable identity for lookups
    pub process_name: String,
    /// Display name (e.g., "Visual Studio Code")
    pub name: String,
    /// Bindings in display order
    #[serde(default)]
    pub shortcuts: Vec<ShortcutMapping>,
}

impl Application {
    /// Creates an application with no shortcuts.
    pub fn new(name: impl Into<String>, process_name: impl Into<String>) -> Self {
        Self {
            process_name: process_name.into(),
            name: name.into(),
            shortcuts: Vec::new(),
        }
    }

    /// Adds a mapping (builder pattern).
    #[must_use]
    pub fn with_shortcut(mut self, mapping: ShortcutMapping) -> Self {
        self.shortcuts.push(mapping);
        self
    }

    /// Looks up a mapping by id.
    #[must_use]
    pub fn find_shortcut(&self, id: &str) -> Option<&ShortcutMapping> {
        self.shortcuts.iter().find(|s| s.id == id)
    }

    /// Returns a copy with `shortcuts` replaced.
    #[must_use]
    pub fn with_shortcuts(&self, shortcuts: Vec<ShortcutMapping>) -> Self {
        Self {
            process_name: self.process_name.clone(),
            name: self.name.clone(),
            shortcuts,
        }
    }

    /// Number of mappings that currently have a key combination.
    #[must_use]
    pub fn bound_count(&self) -> usize {
        self.shortcuts.iter().filter(|s| s.is_bound()).count()
    }

    /// First mapping id that appears more than once, if any.
    #[must_use]
    pub fn duplicate_shortcut_id(&self) -> Option<&str> {
        self.shortcuts.iter().enumerate().find_map(|(idx, mapping)| {
            self.shortcuts[..idx]
                .iter()
                .any(|earlier| earlier.id == mapping.id)
                .then_some(mapping.id.as_str())
        })
    }
}
