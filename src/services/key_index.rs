//! Key-to-binding lookup.
//!
//! Answers "which bindings involve key K" for the side panel, for
//! highlighting during recording, and for the `keys find` command:
//! - [`find_bindings_for_key`] scans every mapping on each call
//! - [`KeyIndex`] precomputes a reverse map for repeated lookups

use crate::models::{Application, Shortcut};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// One mapping that involves the queried key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyBinding {
    /// Mapping id (unique within its application)
    pub binding_id: String,
    /// Owning application's process name
    pub app_process_name: String,
    /// Owning application's display name
    pub app_name: String,
    /// The bound combination
    pub shortcut: Shortcut,
    /// Mapping's friendly name
    pub friendly_name: String,
}

/// Returns every bound mapping whose trigger key or modifiers include `key`.
///
/// Results follow application order, then mapping order. Unbound mappings
/// never match.
///
/// # Examples
///
/// ```
/// use shortkeys::models::{Application, ShortcutMapping};
/// use shortkeys::services::key_index::find_bindings_for_key;
///
/// let apps = vec![Application::new("VS Code", "code.exe").with_shortcut(
///     ShortcutMapping::new("1", "Ctrl+Shift+P".parse().unwrap(), "Command Palette"),
/// )];
///
/// assert_eq!(find_bindings_for_key(&apps, "Ctrl").len(), 1);
/// assert!(find_bindings_for_key(&apps, "X").is_empty());
/// ```
#[must_use]
pub fn find_bindings_for_key(apps: &[Application], key: &str) -> Vec<KeyBinding> {
    apps.iter()
        .flat_map(|app| {
            app.shortcuts.iter().filter_map(move |mapping| {
                let shortcut = mapping.shortcut.as_ref()?;
                shortcut.involves(key).then(|| KeyBinding {
                    binding_id: mapping.id.clone(),
                    app_process_name: app.process_name.clone(),
                    app_name: app.name.clone(),
                    shortcut: shortcut.clone(),
                    friendly_name: mapping.friendly_name.clone(),
                })
            })
        })
        .collect()
}

/// Reverse index from key label to the bindings that use it.
///
/// Built once from an application list; rebuild after the list changes.
/// Lookups return the same bindings, in the same order, as
/// [`find_bindings_for_key`].
#[derive(Debug, Clone, Default)]
pub struct KeyIndex {
    by_key: HashMap<String, Vec<KeyBinding>>,
}

impl KeyIndex {
    /// Indexes every bound mapping under its trigger key and each modifier.
    #[must_use]
    pub fn build(apps: &[Application]) -> Self {
        let mut by_key: HashMap<String, Vec<KeyBinding>> = HashMap::new();

        for app in apps {
            for mapping in &app.shortcuts {
                let Some(shortcut) = mapping.shortcut.as_ref() else {
                    continue;
                };

                let binding = KeyBinding {
                    binding_id: mapping.id.clone(),
                    app_process_name: app.process_name.clone(),
                    app_name: app.name.clone(),
                    shortcut: shortcut.clone(),
                    friendly_name: mapping.friendly_name.clone(),
                };

                for label in shortcut.labels() {
                    by_key
                        .entry(label.to_string())
                        .or_default()
                        .push(binding.clone());
                }
            }
        }

        Self { by_key }
    }

    /// Bindings involving `key`, or an empty slice.
    #[must_use]
    pub fn get(&self, key: &str) -> &[KeyBinding] {
        self.by_key.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// True when at least one binding uses `key`.
    #[must_use]
    pub fn is_bound(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// All labels with at least one binding, sorted.
    #[must_use]
    pub fn bound_keys(&self) -> BTreeSet<&str> {
        self.by_key.keys().map(String::as_str).collect()
    }
}
