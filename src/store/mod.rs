//! Authoritative shortcut state and its mutation operations.
//!
//! The store owns the application list and at most one [`EditingSession`].
//! Every mutation builds a new value for the affected application and swaps
//! it in, so a previously cloned application list never changes under the
//! caller. Rejected operations return a [`StoreError`] and leave state as it
//! was.

pub mod error;
pub mod session;

pub use error::StoreError;
pub use session::{EditMode, EditingSession};

use crate::models::{Application, Shortcut, ShortcutMapping};
use tracing::{debug, warn};
use uuid::Uuid;

/// In-memory application list plus the editing-session state machine.
///
/// Session states: idle (`session() == None`), editing an existing mapping,
/// or drafting a new one. `start_editing`/`start_new_shortcut` enter a
/// session; `save_shortcut` (on success) and `cancel_editing` leave it.
#[derive(Debug, Clone, Default)]
pub struct ShortcutStore {
    apps: Vec<Application>,
    session: Option<EditingSession>,
}

impl ShortcutStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from an existing application list.
    ///
    /// Fails when process names or mapping ids are not unique.
    pub fn with_applications(apps: Vec<Application>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        store.replace_applications(apps)?;
        Ok(store)
    }

    /// All applications in insertion order.
    #[must_use]
    pub fn applications(&self) -> &[Application] {
        &self.apps
    }

    /// Consumes the store, returning its applications.
    #[must_use]
    pub fn into_applications(self) -> Vec<Application> {
        self.apps
    }

    /// Looks up an application by process name.
    ///
    /// An exact match wins; otherwise the name is compared in its
    /// normalized form, so `Code.EXE` finds `code.exe`.
    #[must_use]
    pub fn application(&self, process_name: &str) -> Option<&Application> {
        self.find_index(process_name).map(|idx| &self.apps[idx])
    }

    fn find_index(&self, process_name: &str) -> Option<usize> {
        self.apps
            .iter()
            .position(|a| a.process_name == process_name)
            .or_else(|| {
                let wanted = normalize_process_name(process_name);
                self.apps.iter().position(|a| a.process_name == wanted)
            })
    }

    fn app_index(&self, process_name: &str) -> Result<usize, StoreError> {
        self.find_index(process_name)
            .ok_or_else(|| StoreError::ApplicationNotFound(process_name.to_string()))
    }

    fn shortcut_index(&self, app_idx: usize, shortcut_id: &str) -> Result<usize, StoreError> {
        let app = &self.apps[app_idx];
        app.shortcuts
            .iter()
            .position(|s| s.id == shortcut_id)
            .ok_or_else(|| StoreError::ShortcutNotFound {
                process_name: app.process_name.clone(),
                shortcut_id: shortcut_id.to_string(),
            })
    }

    // ------------------------------------------------------------------
    // Applications
    // ------------------------------------------------------------------

    /// Appends a new application with no shortcuts.
    ///
    /// Both fields are trimmed and the process name is lowercased. A process
    /// name that already exists is rejected with
    /// [`StoreError::DuplicateApplication`].
    pub fn add_application(
        &mut self,
        name: &str,
        process_name: &str,
    ) -> Result<&Application, StoreError> {
        let name = name.trim();
        let process_name = normalize_process_name(process_name);

        if name.is_empty() {
            return Err(StoreError::Validation(
                "application name cannot be empty".to_string(),
            ));
        }
        if process_name.is_empty() {
            return Err(StoreError::Validation(
                "process name cannot be empty".to_string(),
            ));
        }
        if self.apps.iter().any(|a| a.process_name == process_name) {
            warn!("Rejected duplicate application '{}'", process_name);
            return Err(StoreError::DuplicateApplication(process_name));
        }

        debug!("Adding application '{}' ({})", name, process_name);
        self.apps.push(Application::new(name, process_name));
        Ok(&self.apps[self.apps.len() - 1])
    }

    /// Removes an application and all of its shortcuts.
    ///
    /// Returns `false` when nothing matched. An open session on the removed
    /// application is discarded.
    pub fn delete_application(&mut self, process_name: &str) -> bool {
        let Some(idx) = self.find_index(process_name) else {
            return false;
        };

        let removed = self.apps.remove(idx);
        debug!("Deleted application '{}'", removed.process_name);
        if self
            .session
            .as_ref()
            .is_some_and(|s| s.app_id == removed.process_name)
        {
            self.session = None;
        }
        true
    }

    /// Changes an application's display name.
    pub fn rename_application(&mut self, process_name: &str, name: &str) -> Result<(), StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::Validation(
                "application name cannot be empty".to_string(),
            ));
        }

        let idx = self.app_index(process_name)?;
        let app = &self.apps[idx];
        self.apps[idx] = Application {
            name: name.to_string(),
            ..app.clone()
        };
        debug!("Renamed application '{}' to '{}'", process_name, name);
        Ok(())
    }

    /// Replaces the whole application list (import).
    ///
    /// The new list is checked for duplicate process names and duplicate
    /// mapping ids first; on failure nothing changes. Any open session is
    /// discarded on success.
    pub fn replace_applications(&mut self, apps: Vec<Application>) -> Result<(), StoreError> {
        validate_applications(&apps)?;

        debug!("Replacing store contents with {} applications", apps.len());
        self.apps = apps;
        self.session = None;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Editing session
    // ------------------------------------------------------------------

    /// The open editing session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&EditingSession> {
        self.session.as_ref()
    }

    /// True while a shortcut is being edited or drafted.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    /// Opens a session on an existing mapping, pre-filled with its fields.
    ///
    /// Replaces any session already open.
    pub fn start_editing(
        &mut self,
        shortcut_id: &str,
        process_name: &str,
    ) -> Result<&EditingSession, StoreError> {
        let app_idx = self.app_index(process_name)?;
        let idx = self.shortcut_index(app_idx, shortcut_id)?;

        let app = &self.apps[app_idx];
        let session = EditingSession::for_existing(&app.process_name, &app.shortcuts[idx]);
        debug!("Editing shortcut '{}' of '{}'", shortcut_id, process_name);
        Ok(&*self.session.insert(session))
    }

    /// Opens a session drafting a new mapping with a freshly generated id.
    ///
    /// Replaces any session already open.
    pub fn start_new_shortcut(&mut self, process_name: &str) -> Result<&EditingSession, StoreError> {
        let app_idx = self.app_index(process_name)?;
        let app = &self.apps[app_idx];

        let id = loop {
            let candidate = Uuid::new_v4().to_string();
            if app.find_shortcut(&candidate).is_none() {
                break candidate;
            }
        };

        debug!("Drafting new shortcut '{}' for '{}'", id, process_name);
        let session = EditingSession::for_new(&app.process_name, id);
        Ok(&*self.session.insert(session))
    }

    /// Discards the open session. No-op when idle.
    pub fn cancel_editing(&mut self) {
        if self.session.take().is_some() {
            debug!("Editing cancelled");
        }
    }

    /// Sets the draft friendly name. Returns `false` when idle.
    pub fn update_shortcut_name(&mut self, name: &str) -> bool {
        self.update_session(|s| s.friendly_name = name.to_string())
    }

    /// Sets the draft extra data (raw text). Returns `false` when idle.
    pub fn update_shortcut_extra_data(&mut self, data: &str) -> bool {
        self.update_session(|s| s.extra_data = data.to_string())
    }

    /// Sets the draft key combination. Returns `false` when idle.
    pub fn update_shortcut_keys(&mut self, shortcut: Shortcut) -> bool {
        self.update_session(|s| s.shortcut = Some(shortcut))
    }

    fn update_session(&mut self, apply: impl FnOnce(&mut EditingSession)) -> bool {
        match self.session.as_ref() {
            Some(current) => {
                let mut next = current.clone();
                apply(&mut next);
                self.session = Some(next);
                true
            }
            None => false,
        }
    }

    /// True when the open session has a non-blank name and a key combination.
    #[must_use]
    pub fn can_save(&self) -> bool {
        self.session.as_ref().is_some_and(EditingSession::can_save)
    }

    /// Writes the open session back into its application and closes it.
    ///
    /// An existing mapping with the session's id is overwritten, otherwise a
    /// new mapping is appended. Non-blank extra data must be valid JSON; it
    /// is stored trimmed, and blank extra data is stored as absent. On any
    /// error the session stays open and no application changes.
    pub fn save_shortcut(&mut self) -> Result<ShortcutMapping, StoreError> {
        let session = self.session.as_ref().ok_or(StoreError::NoActiveSession)?;

        if session.friendly_name.trim().is_empty() {
            return Err(StoreError::Validation(
                "friendly name cannot be empty".to_string(),
            ));
        }
        let Some(shortcut) = session.shortcut.clone() else {
            return Err(StoreError::Validation(
                "a key combination is required".to_string(),
            ));
        };

        let extra = session.extra_data.trim();
        let extra_data = if extra.is_empty() {
            None
        } else {
            serde_json::from_str::<serde_json::Value>(extra).map_err(|e| {
                warn!("Rejected extra data for '{}': {}", session.shortcut_id, e);
                StoreError::Validation(format!("extra data is not valid JSON: {e}"))
            })?;
            Some(extra.to_string())
        };

        let app_idx = self.app_index(&session.app_id)?;
        let mapping = ShortcutMapping {
            id: session.shortcut_id.clone(),
            shortcut: Some(shortcut),
            friendly_name: session.friendly_name.clone(),
            extra_data,
        };

        let app = &self.apps[app_idx];
        let mut shortcuts = app.shortcuts.clone();
        match shortcuts.iter().position(|s| s.id == mapping.id) {
            Some(idx) => shortcuts[idx] = mapping.clone(),
            None => shortcuts.push(mapping.clone()),
        }
        self.apps[app_idx] = app.with_shortcuts(shortcuts);

        debug!(
            "Saved shortcut '{}' ({}) in '{}'",
            mapping.id, mapping.friendly_name, session.app_id
        );
        self.session = None;
        Ok(mapping)
    }

    // ------------------------------------------------------------------
    // Mappings
    // ------------------------------------------------------------------

    /// Removes a mapping's key combination, keeping its id, name and extra data.
    pub fn unbind_shortcut(&mut self, shortcut_id: &str, process_name: &str) -> Result<(), StoreError> {
        let app_idx = self.app_index(process_name)?;
        let idx = self.shortcut_index(app_idx, shortcut_id)?;

        let app = &self.apps[app_idx];
        let mut shortcuts = app.shortcuts.clone();
        shortcuts[idx] = shortcuts[idx].unbound();
        self.apps[app_idx] = app.with_shortcuts(shortcuts);

        debug!("Unbound shortcut '{}' in '{}'", shortcut_id, process_name);
        Ok(())
    }

    /// Removes exactly one mapping.
    pub fn delete_shortcut(&mut self, shortcut_id: &str, process_name: &str) -> Result<(), StoreError> {
        let app_idx = self.app_index(process_name)?;
        let idx = self.shortcut_index(app_idx, shortcut_id)?;

        let app = &self.apps[app_idx];
        let mut shortcuts = app.shortcuts.clone();
        shortcuts.remove(idx);
        self.apps[app_idx] = app.with_shortcuts(shortcuts);

        debug!("Deleted shortcut '{}' in '{}'", shortcut_id, process_name);
        Ok(())
    }
}

/// Canonical form of a process name: trimmed and lowercased.
///
/// ```
/// use shortkeys::store::normalize_process_name;
///
/// assert_eq!(normalize_process_name("  Code.EXE "), "code.exe");
/// ```
#[must_use]
pub fn normalize_process_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Checks the uniqueness invariants of an application list.
pub fn validate_applications(apps: &[Application]) -> Result<(), StoreError> {
    for (idx, app) in apps.iter().enumerate() {
        if apps[..idx]
            .iter()
            .any(|earlier| earlier.process_name == app.process_name)
        {
            return Err(StoreError::DuplicateApplication(app.process_name.clone()));
        }
        if let Some(id) = app.duplicate_shortcut_id() {
            return Err(StoreError::Validation(format!(
                "shortcut id '{}' appears more than once in '{}'",
                id, app.process_name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vscode_store() -> ShortcutStore {
        let app = Application::new("VS Code", "code.exe")
            .with_shortcut(ShortcutMapping::new(
                "1",
                "Ctrl+Shift+P".parse().unwrap(),
                "Command Palette",
            ))
            .with_shortcut(
                ShortcutMapping::new("2", "Ctrl+B".parse().unwrap(), "Toggle Sidebar")
                    .with_extra_data(r#"{"panel":"left"}"#),
            );
        let chrome = Application::new("Google Chrome", "chrome.exe").with_shortcut(
            ShortcutMapping::new("1", "Ctrl+T".parse().unwrap(), "New Tab"),
        );
        ShortcutStore::with_applications(vec![app, chrome]).unwrap()
    }

    #[test]
    fn test_add_application() {
        let mut store = ShortcutStore::new();
        let app = store.add_application(" Firefox ", " Firefox.EXE ").unwrap();
        assert_eq!(app.name, "Firefox");
        assert_eq!(app.process_name, "firefox.exe");
        assert!(app.shortcuts.is_empty());
    }

    #[test]
    fn test_add_application_duplicate_rejected() {
        let mut store = ShortcutStore::new();
        store.add_application("Code", "code.exe").unwrap();
        let err = store.add_application("Other", "code.exe").unwrap_err();

        assert_eq!(err, StoreError::DuplicateApplication("code.exe".to_string()));
        assert_eq!(
            store
                .applications()
                .iter()
                .filter(|a| a.process_name == "code.exe")
                .count(),
            1
        );
        assert_eq!(store.application("code.exe").unwrap().name, "Code");
    }

    #[test]
    fn test_add_application_blank_fields() {
        let mut store = ShortcutStore::new();
        assert!(matches!(
            store.add_application("  ", "x.exe"),
            Err(StoreError::Validation(_))
        ));
        assert!(matches!(
            store.add_application("X", ""),
            Err(StoreError::Validation(_))
        ));
        assert!(store.applications().is_empty());
    }

    #[test]
    fn test_delete_application_idempotent() {
        let mut store = vscode_store();
        assert!(store.delete_application("code.exe"));
        assert!(!store.delete_application("code.exe"));
        assert_eq!(store.applications().len(), 1);
        assert_eq!(store.applications()[0].process_name, "chrome.exe");
    }

    #[test]
    fn test_delete_application_closes_its_session() {
        let mut store = vscode_store();
        store.start_editing("1", "code.exe").unwrap();
        store.delete_application("chrome.exe");
        assert!(store.is_editing());

        store.delete_application("code.exe");
        assert!(!store.is_editing());
    }

    #[test]
    fn test_rename_application() {
        let mut store = vscode_store();
        store.rename_application("code.exe", "Visual Studio Code").unwrap();
        assert_eq!(store.application("code.exe").unwrap().name, "Visual Studio Code");
        assert!(store.rename_application("nope.exe", "X").unwrap_err().is_not_found());
    }

    #[test]
    fn test_start_editing_prefills_session() {
        let mut store = vscode_store();
        let session = store.start_editing("2", "code.exe").unwrap();

        assert_eq!(session.mode, EditMode::Existing);
        assert_eq!(session.app_id, "code.exe");
        assert_eq!(session.friendly_name, "Toggle Sidebar");
        assert_eq!(session.extra_data, r#"{"panel":"left"}"#);
        assert_eq!(session.shortcut.as_ref().unwrap().key(), "B");
    }

    #[test]
    fn test_start_editing_missing_targets() {
        let mut store = vscode_store();
        assert_eq!(
            store.start_editing("9", "code.exe").unwrap_err(),
            StoreError::ShortcutNotFound {
                process_name: "code.exe".to_string(),
                shortcut_id: "9".to_string(),
            }
        );
        assert_eq!(
            store.start_editing("1", "vim").unwrap_err(),
            StoreError::ApplicationNotFound("vim".to_string())
        );
        assert!(!store.is_editing());
    }

    #[test]
    fn test_start_new_shortcut() {
        let mut store = vscode_store();
        let session = store.start_new_shortcut("code.exe").unwrap().clone();

        assert_eq!(session.mode, EditMode::New);
        assert!(session.friendly_name.is_empty());
        assert!(session.extra_data.is_empty());
        assert!(session.shortcut.is_none());
        assert!(store.application("code.exe").unwrap().find_shortcut(&session.shortcut_id).is_none());
        assert!(!store.can_save());
    }

    #[test]
    fn test_new_session_replaces_open_one() {
        let mut store = vscode_store();
        store.start_editing("1", "code.exe").unwrap();
        store.start_new_shortcut("chrome.exe").unwrap();

        let session = store.session().unwrap();
        assert_eq!(session.app_id, "chrome.exe");
        assert_eq!(session.mode, EditMode::New);
    }

    #[test]
    fn test_updates_without_session_do_nothing() {
        let mut store = vscode_store();
        assert!(!store.update_shortcut_name("x"));
        assert!(!store.update_shortcut_extra_data("{}"));
        assert!(!store.update_shortcut_keys("Ctrl+X".parse().unwrap()));
        assert!(store.session().is_none());
    }

    #[test]
    fn test_can_save_requires_name_and_keys() {
        let mut store = vscode_store();
        store.start_new_shortcut("code.exe").unwrap();

        store.update_shortcut_name("   ");
        store.update_shortcut_keys("Ctrl+K".parse().unwrap());
        assert!(!store.can_save());

        store.update_shortcut_name("Open Folder");
        assert!(store.can_save());
    }

    #[test]
    fn test_save_new_shortcut_appends() {
        let mut store = vscode_store();
        let id = store.start_new_shortcut("code.exe").unwrap().shortcut_id.clone();
        store.update_shortcut_name("Quick Open");
        store.update_shortcut_keys("Ctrl+P".parse().unwrap());
        store.update_shortcut_extra_data("  ");

        let saved = store.save_shortcut().unwrap();
        assert_eq!(saved.id, id);
        assert_eq!(saved.extra_data, None);
        assert!(!store.is_editing());

        let app = store.application("code.exe").unwrap();
        assert_eq!(app.shortcuts.len(), 3);
        assert_eq!(app.shortcuts[2].friendly_name, "Quick Open");
    }

    #[test]
    fn test_save_existing_overwrites_in_place() {
        let mut store = vscode_store();
        store.start_editing("1", "code.exe").unwrap();
        store.update_shortcut_name("Palette");
        store.update_shortcut_keys("Ctrl+Alt+P".parse().unwrap());
        store.update_shortcut_extra_data(r#" {"when":"editorFocus"} "#);
        store.save_shortcut().unwrap();

        let app = store.application("code.exe").unwrap();
        assert_eq!(app.shortcuts.len(), 2);
        assert_eq!(app.shortcuts[0].id, "1");
        assert_eq!(app.shortcuts[0].friendly_name, "Palette");
        assert_eq!(app.shortcuts[0].shortcut.as_ref().unwrap().to_string(), "Alt + Ctrl + P");
        assert_eq!(app.shortcuts[0].extra_data.as_deref(), Some(r#"{"when":"editorFocus"}"#));
    }

    #[test]
    fn test_save_rejected_when_cannot_save() {
        let mut store = vscode_store();
        let before = store.applications().to_vec();

        store.start_new_shortcut("code.exe").unwrap();
        store.update_shortcut_name("Nameless keys");
        assert!(matches!(store.save_shortcut(), Err(StoreError::Validation(_))));
        assert!(store.is_editing());
        assert_eq!(store.applications(), before.as_slice());
    }

    #[test]
    fn test_save_rejects_invalid_extra_data() {
        let mut store = vscode_store();
        let before = store.applications().to_vec();

        store.start_editing("1", "code.exe").unwrap();
        store.update_shortcut_name("Changed");
        store.update_shortcut_extra_data("{not json");
        let err = store.save_shortcut().unwrap_err();

        assert!(matches!(err, StoreError::Validation(ref msg) if msg.contains("JSON")));
        assert!(store.is_editing());
        assert_eq!(store.session().unwrap().friendly_name, "Changed");
        assert_eq!(store.applications(), before.as_slice());
    }

    #[test]
    fn test_save_without_session() {
        let mut store = vscode_store();
        assert_eq!(store.save_shortcut().unwrap_err(), StoreError::NoActiveSession);
    }

    #[test]
    fn test_cancel_editing_discards_draft() {
        let mut store = vscode_store();
        store.start_editing("1", "code.exe").unwrap();
        store.update_shortcut_name("Something else");
        store.cancel_editing();

        assert!(!store.is_editing());
        let app = store.application("code.exe").unwrap();
        assert_eq!(app.shortcuts[0].friendly_name, "Command Palette");
    }

    #[test]
    fn test_unbind_preserves_fields() {
        let mut store = vscode_store();
        store.unbind_shortcut("2", "code.exe").unwrap();

        let mapping = store.application("code.exe").unwrap().find_shortcut("2").unwrap();
        assert!(mapping.shortcut.is_none());
        assert_eq!(mapping.id, "2");
        assert_eq!(mapping.friendly_name, "Toggle Sidebar");
        assert_eq!(mapping.extra_data.as_deref(), Some(r#"{"panel":"left"}"#));
    }

    #[test]
    fn test_delete_shortcut_removes_exactly_one() {
        let mut store = vscode_store();
        store.delete_shortcut("1", "code.exe").unwrap();

        let code = store.application("code.exe").unwrap();
        assert_eq!(code.shortcuts.len(), 1);
        assert_eq!(code.shortcuts[0].id, "2");

        // Same id in another application is untouched
        let chrome = store.application("chrome.exe").unwrap();
        assert_eq!(chrome.shortcuts.len(), 1);
        assert_eq!(chrome.shortcuts[0].id, "1");
    }

    #[test]
    fn test_mapping_operations_report_not_found() {
        let mut store = vscode_store();
        assert!(store.unbind_shortcut("9", "code.exe").unwrap_err().is_not_found());
        assert!(store.delete_shortcut("1", "vim").unwrap_err().is_not_found());
    }

    #[test]
    fn test_mutation_does_not_affect_earlier_snapshot() {
        let mut store = vscode_store();
        let snapshot = store.applications().to_vec();
        store.delete_shortcut("1", "code.exe").unwrap();
        assert_eq!(snapshot[0].shortcuts.len(), 2);
    }

    #[test]
    fn test_replace_applications_validates_first() {
        let mut store = vscode_store();
        let before = store.applications().to_vec();

        let dupes = vec![Application::new("A", "a.exe"), Application::new("B", "a.exe")];
        assert!(matches!(
            store.replace_applications(dupes),
            Err(StoreError::DuplicateApplication(_))
        ));

        let dup_ids = vec![Application::new("A", "a.exe")
            .with_shortcut(ShortcutMapping::new("1", "F1".parse().unwrap(), "One"))
            .with_shortcut(ShortcutMapping::new("1", "F2".parse().unwrap(), "Two"))];
        assert!(matches!(
            store.replace_applications(dup_ids),
            Err(StoreError::Validation(_))
        ));
        assert_eq!(store.applications(), before.as_slice());

        store.replace_applications(vec![Application::new("A", "a.exe")]).unwrap();
        assert_eq!(store.applications().len(), 1);
    }

    #[test]
    fn test_process_name_lookups_ignore_case() {
        let mut store = vscode_store();
        assert_eq!(store.application(" Code.EXE ").unwrap().name, "VS Code");

        store.start_editing("1", "CODE.exe").unwrap();
        assert_eq!(store.session().unwrap().app_id, "code.exe");
        store.update_shortcut_keys("Ctrl+Alt+P".parse().unwrap());
        store.save_shortcut().unwrap();
        let app = store.application("code.exe").unwrap();
        assert_eq!(app.shortcuts[0].shortcut.as_ref().unwrap().to_string(), "Alt + Ctrl + P");

        store.start_new_shortcut("Code.Exe").unwrap();
        assert_eq!(store.session().unwrap().app_id, "code.exe");
        assert!(store.delete_application("CODE.EXE"));
        assert!(store.session().is_none(), "Deleting the app closes its session");
        assert!(store.application("code.exe").is_none());
    }

    #[test]
    fn test_exact_process_name_wins_over_normalized() {
        let mut store = ShortcutStore::with_applications(vec![
            Application::new("Upper", "Tool.exe"),
            Application::new("Lower", "tool.exe"),
        ])
        .unwrap();

        assert_eq!(store.application("Tool.exe").unwrap().name, "Upper");
        assert_eq!(store.application("TOOL.EXE").unwrap().name, "Lower");
        assert!(store.delete_application("Tool.exe"));
        assert_eq!(store.applications()[0].name, "Lower");
    }
}
