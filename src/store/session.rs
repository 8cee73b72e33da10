//! The single in-progress edit of one shortcut mapping.

use crate::models::{Shortcut, ShortcutMapping};

/// Whether the session edits an existing mapping or drafts a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Opened with `start_editing` on a stored mapping
    Existing,
    /// Opened with `start_new_shortcut`; the id is freshly generated
    New,
}

/// Draft state for one mapping.
///
/// Only the store creates sessions; callers read them through
/// [`ShortcutStore::session`](super::ShortcutStore::session).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditingSession {
    /// Process name of the application being edited
    pub app_id: String,
    /// Id of the mapping that will be written on save
    pub shortcut_id: String,
    /// Draft friendly name
    pub friendly_name: String,
    /// Draft extra data, raw text as typed
    pub extra_data: String,
    /// Draft key combination
    pub shortcut: Option<Shortcut>,
    /// Existing or new mapping
    pub mode: EditMode,
}

impl EditingSession {
    pub(crate) fn for_existing(app_id: &str, mapping: &ShortcutMapping) -> Self {
        Self {
            app_id: app_id.to_string(),
            shortcut_id: mapping.id.clone(),
            friendly_name: mapping.friendly_name.clone(),
            extra_data: mapping.extra_data.clone().unwrap_or_default(),
            shortcut: mapping.shortcut.clone(),
            mode: EditMode::Existing,
        }
    }

    pub(crate) fn for_new(app_id: &str, shortcut_id: String) -> Self {
        Self {
            app_id: app_id.to_string(),
            shortcut_id,
            friendly_name: String::new(),
            extra_data: String::new(),
            shortcut: None,
            mode: EditMode::New,
        }
    }

    /// True when the draft has a non-blank name and a key combination.
    #[must_use]
    pub fn can_save(&self) -> bool {
        !self.friendly_name.trim().is_empty() && self.shortcut.is_some()
    }
}
