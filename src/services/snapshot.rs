//! Versioned JSON snapshot of the application list.
//!
//! Format:
//!
//! ```text
//! { "version": "1.0", "apps": [ { "processName", "name", "shortcuts": [...] } ] }
//! ```
//!
//! Import is all-or-nothing: the payload is fully parsed and checked before
//! any application list is returned.

use crate::models::Application;
use crate::store::validate_applications;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The only snapshot version this build reads and writes.
pub const SNAPSHOT_VERSION: &str = "1.0";

/// Rejected import payload.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Not JSON, or not shaped like a snapshot envelope.
    #[error("invalid snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    /// Envelope parsed but carries an unsupported version.
    #[error("unsupported snapshot version '{0}' (expected 1.0)")]
    UnsupportedVersion(String),

    /// Envelope parsed but its contents break an invariant.
    #[error("invalid snapshot contents: {0}")]
    Invalid(String),
}

/// Serialized envelope.
#[derive(Debug, Serialize)]
struct SnapshotOut<'a> {
    version: &'static str,
    apps: Vec<&'a Application>,
}

/// Deserialized envelope. `apps` stays raw until the version is checked so a
/// future format fails on version rather than on shape.
#[derive(Debug, Deserialize)]
struct SnapshotIn {
    version: String,
    apps: serde_json::Value,
}

/// Export formatting options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Indent output with two spaces
    pub pretty: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Serializes `apps`, or only those whose process name is in `subset`.
///
/// Application order is preserved in both cases; names in `subset` that match
/// nothing are ignored.
pub fn export_snapshot(
    apps: &[Application],
    subset: Option<&[String]>,
) -> Result<String, SnapshotError> {
    export_snapshot_with(apps, subset, ExportOptions::default())
}

/// [`export_snapshot`] with explicit formatting options.
pub fn export_snapshot_with(
    apps: &[Application],
    subset: Option<&[String]>,
    options: ExportOptions,
) -> Result<String, SnapshotError> {
    let selected = apps
        .iter()
        .filter(|app| subset.map_or(true, |names| names.contains(&app.process_name)))
        .collect();

    let envelope = SnapshotOut {
        version: SNAPSHOT_VERSION,
        apps: selected,
    };

    let text = if options.pretty {
        serde_json::to_string_pretty(&envelope)?
    } else {
        serde_json::to_string(&envelope)?
    };
    Ok(text)
}

/// Parses a snapshot and returns its applications verbatim.
///
/// The caller decides what to do with them; importing replaces the store.
pub fn import_snapshot(text: &str) -> Result<Vec<Application>, SnapshotError> {
    let envelope: SnapshotIn = serde_json::from_str(text)?;

    if envelope.version != SNAPSHOT_VERSION {
        return Err(SnapshotError::UnsupportedVersion(envelope.version));
    }

    let apps: Vec<Application> = serde_json::from_value(envelope.apps)?;
    validate_applications(&apps).map_err(|e| SnapshotError::Invalid(e.to_string()))?;

    Ok(apps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShortcutMapping;

    fn sample_apps() -> Vec<Application> {
        vec![
            Application::new("VS Code", "code.exe")
                .with_shortcut(ShortcutMapping::new(
                    "1",
                    "Ctrl+Shift+P".parse().unwrap(),
                    "Command Palette",
                ))
                .with_shortcut(
                    ShortcutMapping::new("2", "Ctrl+B".parse().unwrap(), "Toggle Sidebar")
                        .with_extra_data(r#"{"panel":"left"}"#)
                        .unbound(),
                ),
            Application::new("Google Chrome", "chrome.exe")
                .with_shortcut(ShortcutMapping::new("1", "Ctrl+T".parse().unwrap(), "New Tab")),
        ]
    }

    #[test]
    fn test_export_envelope() {
        let text = export_snapshot(&sample_apps()[..1], None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["version"], "1.0");
        assert_eq!(value["apps"][0]["processName"], "code.exe");
        assert_eq!(
            value["apps"][0]["shortcuts"][0]["shortcut"],
            serde_json::json!({ "modifiers": ["Ctrl", "Shift"], "key": "P" })
        );
        assert!(value["apps"][0]["shortcuts"][1]["shortcut"].is_null());
    }

    #[test]
    fn test_export_is_pretty_by_default() {
        let text = export_snapshot(&sample_apps(), None).unwrap();
        assert!(text.contains("\n  \"version\": \"1.0\""));

        let compact =
            export_snapshot_with(&sample_apps(), None, ExportOptions { pretty: false }).unwrap();
        assert!(!compact.contains('\n'));
    }

    #[test]
    fn test_round_trip() {
        let apps = sample_apps();
        let text = export_snapshot(&apps, None).unwrap();
        assert_eq!(import_snapshot(&text).unwrap(), apps);
    }

    #[test]
    fn test_scenario_reimport_key() {
        let apps = vec![Application::new("VS Code", "code.exe").with_shortcut(
            ShortcutMapping::new("1", "Ctrl+Shift+P".parse().unwrap(), "Command Palette"),
        )];

        let text = export_snapshot(&apps, None).unwrap();
        let imported = import_snapshot(&text).unwrap();

        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].shortcuts.len(), 1);
        assert_eq!(imported[0].shortcuts[0].shortcut.as_ref().unwrap().key(), "P");
    }

    #[test]
    fn test_export_subset_keeps_app_order() {
        let apps = sample_apps();
        let subset = vec!["chrome.exe".to_string(), "code.exe".to_string(), "x".to_string()];
        let text = export_snapshot(&apps, Some(subset.as_slice())).unwrap();
        let imported = import_snapshot(&text).unwrap();
        assert_eq!(imported, apps);

        let only_chrome = vec!["chrome.exe".to_string()];
        let text = export_snapshot(&apps, Some(only_chrome.as_slice())).unwrap();
        let imported = import_snapshot(&text).unwrap();
        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].process_name, "chrome.exe");
    }

    #[test]
    fn test_import_modifier_order_is_irrelevant() {
        let text = r#"{"version":"1.0","apps":[{"processName":"code.exe","name":"VS Code",
            "shortcuts":[{"id":"1","shortcut":{"modifiers":["Shift","Ctrl"],"key":"P"},
            "friendlyName":"Command Palette"}]}]}"#;
        let imported = import_snapshot(text).unwrap();
        let expected = Application::new("VS Code", "code.exe").with_shortcut(
            ShortcutMapping::new("1", "Ctrl+Shift+P".parse().unwrap(), "Command Palette"),
        );
        assert_eq!(imported, vec![expected]);
    }

    #[test]
    fn test_import_rejects_wrong_version() {
        let err = import_snapshot(r#"{"version":"2.0","apps":[]}"#).unwrap_err();
        assert!(matches!(err, SnapshotError::UnsupportedVersion(ref v) if v == "2.0"));
    }

    #[test]
    fn test_import_rejects_malformed() {
        assert!(matches!(import_snapshot("not json"), Err(SnapshotError::Parse(_))));
        assert!(matches!(import_snapshot(r#"{"apps":[]}"#), Err(SnapshotError::Parse(_))));
        assert!(matches!(
            import_snapshot(r#"{"version":"1.0","apps":[{"name":"x"}]}"#),
            Err(SnapshotError::Parse(_))
        ));
        assert!(matches!(
            import_snapshot(
                r#"{"version":"1.0","apps":[{"processName":"a","name":"A","shortcuts":
                [{"id":"1","shortcut":{"modifiers":["Ctrl"],"key":"Ctrl"},"friendlyName":"x"}]}]}"#
            ),
            Err(SnapshotError::Parse(_))
        ));
    }

    #[test]
    fn test_import_rejects_duplicates() {
        let text = r#"{"version":"1.0","apps":[
            {"processName":"a.exe","name":"A","shortcuts":[]},
            {"processName":"a.exe","name":"B","shortcuts":[]}]}"#;
        assert!(matches!(import_snapshot(text), Err(SnapshotError::Invalid(_))));
    }
}
