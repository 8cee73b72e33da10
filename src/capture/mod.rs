//! Key capture: raw key events in, canonical labels and shortcuts out.
//!
//! The store never sees physical input. Front ends feed raw
//! `(code, char)` pairs through [`normalize_key`], or terminal events through
//! [`terminal`], and hand the resulting [`Shortcut`] to
//! `ShortcutStore::update_shortcut_keys`.

pub mod terminal;

use crate::models::{canonical_key_label, ModifierKey, ModifierSet, Shortcut};
use std::collections::BTreeSet;
use std::fmt;
use tracing::trace;

/// A normalized key: either one of the four modifiers or a plain key label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyLabel {
    /// Ctrl, Alt, Shift or Win
    Modifier(ModifierKey),
    /// Any non-modifier key ("P", "5", "F5", "Enter")
    Key(String),
}

impl KeyLabel {
    /// Canonical label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Modifier(m) => m.as_str(),
            Self::Key(k) => k,
        }
    }

    /// True for the four modifier keys.
    #[must_use]
    pub const fn is_modifier(&self) -> bool {
        matches!(self, Self::Modifier(_))
    }
}

impl fmt::Display for KeyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static display-name table for modifier codes (left and right variants).
const MODIFIER_CODES: &[(&str, ModifierKey)] = &[
    ("ShiftLeft", ModifierKey::Shift),
    ("ShiftRight", ModifierKey::Shift),
    ("ControlLeft", ModifierKey::Ctrl),
    ("ControlRight", ModifierKey::Ctrl),
    ("AltLeft", ModifierKey::Alt),
    ("AltRight", ModifierKey::Alt),
    ("MetaLeft", ModifierKey::Win),
    ("MetaRight", ModifierKey::Win),
    ("OSLeft", ModifierKey::Win),
    ("OSRight", ModifierKey::Win),
];

/// Maps a physical key code plus its produced character to a canonical label.
///
/// - modifier codes collapse to `Ctrl`, `Alt`, `Shift` or `Win`
/// - `KeyA`..`KeyZ` become `A`..`Z`, `Digit0`..`Digit9` become `0`..`9`
/// - otherwise a one-character value is uppercased and named keys take
///   their canonical label (`Escape` -> `Esc`, ` ` -> `Space`)
///
/// ```
/// use shortkeys::capture::{normalize_key, KeyLabel};
/// use shortkeys::models::ModifierKey;
///
/// assert_eq!(normalize_key("ControlRight", "Control"), KeyLabel::Modifier(ModifierKey::Ctrl));
/// assert_eq!(normalize_key("KeyP", "p"), KeyLabel::Key("P".to_string()));
/// assert_eq!(normalize_key("Digit5", "%"), KeyLabel::Key("5".to_string()));
/// ```
#[must_use]
pub fn normalize_key(code: &str, raw: &str) -> KeyLabel {
    if let Some((_, modifier)) = MODIFIER_CODES.iter().find(|(c, _)| *c == code) {
        return KeyLabel::Modifier(*modifier);
    }

    if let Some(letter) = code.strip_prefix("Key").filter(|s| !s.is_empty()) {
        return KeyLabel::Key(letter.to_uppercase());
    }

    if let Some(digit) = code.strip_prefix("Digit").filter(|s| !s.is_empty()) {
        return KeyLabel::Key(digit.to_string());
    }

    // A blank produced character (the space bar) falls back to the code
    let source = if raw.trim().is_empty() { code } else { raw };
    if source.chars().count() == 1 {
        KeyLabel::Key(source.to_uppercase())
    } else {
        KeyLabel::Key(canonical_key_label(source))
    }
}

/// Turns a stream of key presses and releases into shortcuts.
///
/// Pressed keys are tracked for highlighting. While recording, releasing a
/// non-modifier key emits a [`Shortcut`] made of that key plus every modifier
/// still held. Releasing a modifier never emits anything.
#[derive(Debug, Clone, Default)]
pub struct ShortcutRecorder {
    active: BTreeSet<KeyLabel>,
    recording: bool,
}

impl ShortcutRecorder {
    /// Creates an idle recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts emitting shortcuts on key release.
    pub fn start(&mut self) {
        self.recording = true;
    }

    /// Stops emitting shortcuts; key tracking continues.
    pub fn stop(&mut self) {
        self.recording = false;
    }

    /// True while recording.
    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Keys currently held down.
    #[must_use]
    pub fn active_keys(&self) -> &BTreeSet<KeyLabel> {
        &self.active
    }

    /// Records a key press.
    pub fn press(&mut self, label: KeyLabel) {
        trace!("press {}", label);
        self.active.insert(label);
    }

    /// Records a key release, returning the captured shortcut if any.
    pub fn release(&mut self, label: KeyLabel) -> Option<Shortcut> {
        trace!("release {}", label);

        let captured = match &label {
            KeyLabel::Key(key) if self.recording => {
                let modifiers: ModifierSet = self
                    .active
                    .iter()
                    .filter_map(|held| match held {
                        KeyLabel::Modifier(m) => Some(*m),
                        KeyLabel::Key(_) => None,
                    })
                    .collect();
                Shortcut::new(modifiers, key.clone()).ok()
            }
            _ => None,
        };

        self.active.remove(&label);
        captured
    }

    /// Convenience for raw events: normalizes, then presses.
    pub fn press_raw(&mut self, code: &str, raw: &str) {
        self.press(normalize_key(code, raw));
    }

    /// Convenience for raw events: normalizes, then releases.
    pub fn release_raw(&mut self, code: &str, raw: &str) -> Option<Shortcut> {
        self.release(normalize_key(code, raw))
    }
}
