//! Key combinations: modifier sets and trigger keys.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when building a [`Shortcut`] from text or labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortcutParseError {
    /// Input was empty or whitespace.
    #[error("shortcut text is empty")]
    Empty,
    /// Modifiers were given but no trigger key followed them.
    #[error("shortcut '{0}' has no trigger key")]
    MissingKey(String),
    /// A part before the trigger key is not a known modifier.
    #[error("unknown modifier '{0}' (expected Ctrl, Alt, Shift or Win)")]
    UnknownModifier(String),
    /// The trigger key is itself a modifier token.
    #[error("'{0}' is a modifier and cannot be the trigger key")]
    ModifierAsKey(String),
}

/// One of the four modifier keys.
///
/// Variant order is the lexicographic order of the display names, so sorted
/// sets render canonically (`Alt + Ctrl + Shift + Win`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ModifierKey {
    /// Alt / Option
    Alt,
    /// Control
    Ctrl,
    /// Shift
    Shift,
    /// Windows / Meta / Command
    Win,
}

impl ModifierKey {
    /// All modifiers in canonical order.
    pub const ALL: [ModifierKey; 4] = [Self::Alt, Self::Ctrl, Self::Shift, Self::Win];

    /// Canonical label used in storage and display.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alt => "Alt",
            Self::Ctrl => "Ctrl",
            Self::Shift => "Shift",
            Self::Win => "Win",
        }
    }

    /// Parses a modifier name, accepting common aliases case-insensitively.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "ctrl" | "control" | "ctl" => Some(Self::Ctrl),
            "alt" | "option" | "opt" => Some(Self::Alt),
            "shift" => Some(Self::Shift),
            "win" | "meta" | "super" | "cmd" | "command" => Some(Self::Win),
            _ => None,
        }
    }
}

impl fmt::Display for ModifierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModifierKey {
    type Err = ShortcutParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| ShortcutParseError::UnknownModifier(s.trim().to_string()))
    }
}

/// Immutable set of modifiers.
///
/// Equality and hashing are defined over set membership, never over the
/// order in which modifiers were pressed or listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModifierSet(BTreeSet<ModifierKey>);

impl ModifierSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new set that also contains `modifier`.
    #[must_use]
    pub fn with(&self, modifier: ModifierKey) -> Self {
        let mut inner = self.0.clone();
        inner.insert(modifier);
        Self(inner)
    }

    /// Checks membership.
    #[must_use]
    pub fn contains(&self, modifier: ModifierKey) -> bool {
        self.0.contains(&modifier)
    }

    /// Iterates in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = ModifierKey> + '_ {
        self.0.iter().copied()
    }

    /// Number of modifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no modifier is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ModifierKey> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = ModifierKey>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for ModifierSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl<'de> Deserialize<'de> for ModifierSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let list = Vec::<ModifierKey>::deserialize(deserializer)?;
        Ok(list.into_iter().collect())
    }
}

/// Named keys and their accepted spellings, compared case-insensitively.
const KEY_ALIASES: &[(&str, &[&str])] = &[
    ("Enter", &["enter", "return"]),
    ("Esc", &["esc", "escape"]),
    ("Space", &["space", "spacebar"]),
    ("Tab", &["tab"]),
    ("Backspace", &["backspace"]),
    ("Delete", &["delete", "del"]),
    ("Insert", &["insert", "ins"]),
    ("Home", &["home"]),
    ("End", &["end"]),
    ("PageUp", &["pageup", "pgup"]),
    ("PageDown", &["pagedown", "pgdn"]),
    ("ArrowUp", &["arrowup", "up"]),
    ("ArrowDown", &["arrowdown", "down"]),
    ("ArrowLeft", &["arrowleft", "left"]),
    ("ArrowRight", &["arrowright", "right"]),
    ("Caps Lock", &["capslock", "caps lock"]),
    ("Menu", &["menu"]),
    ("PrintScreen", &["printscreen"]),
    ("ScrollLock", &["scrolllock"]),
    ("NumLock", &["numlock"]),
    ("Pause", &["pause"]),
];

/// Normalizes a trigger-key label to its canonical spelling.
///
/// Single characters are uppercased, function keys are written `F1`..`F24`
/// and named keys collapse to one label (`escape` -> `Esc`, `up` -> `ArrowUp`).
/// Unknown names are kept as given.
///
/// ```
/// use shortkeys::models::shortcut::canonical_key_label;
///
/// assert_eq!(canonical_key_label("return"), "Enter");
/// assert_eq!(canonical_key_label("pgdn"), "PageDown");
/// assert_eq!(canonical_key_label("Semicolon"), "Semicolon");
/// ```
#[must_use]
pub fn canonical_key_label(raw: &str) -> String {
    let raw = raw.trim();
    let lower = raw.to_lowercase();
    if let Some((label, _)) = KEY_ALIASES
        .iter()
        .find(|(_, aliases)| aliases.contains(&lower.as_str()))
    {
        return (*label).to_string();
    }

    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_uppercase().collect(),
        (Some('f' | 'F'), Some(_)) if raw[1..].chars().all(|c| c.is_ascii_digit()) => {
            format!("F{}", &raw[1..])
        }
        _ => raw.to_string(),
    }
}

/// Canonical label for any user-typed key name: modifier aliases collapse to
/// their modifier (`control` -> `Ctrl`), everything else goes through
/// [`canonical_key_label`].
#[must_use]
pub fn canonical_label(raw: &str) -> String {
    ModifierKey::from_label(raw).map_or_else(|| canonical_key_label(raw), |m| m.as_str().to_string())
}

/// A key combination: a set of modifiers plus one non-modifier trigger key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawShortcut")]
pub struct Shortcut {
    modifiers: ModifierSet,
    key: String,
}

/// Unchecked wire form, validated through [`Shortcut::new`].
#[derive(Deserialize)]
struct RawShortcut {
    #[serde(default)]
    modifiers: ModifierSet,
    key: String,
}

impl TryFrom<RawShortcut> for Shortcut {
    type Error = ShortcutParseError;

    fn try_from(raw: RawShortcut) -> Result<Self, Self::Error> {
        Self::new(raw.modifiers, raw.key)
    }
}

impl Shortcut {
    /// Creates a shortcut, rejecting empty keys and modifier tokens as keys.
    ///
    /// The key is stored exactly as given; callers that accept user text
    /// should go through [`canonical_key_label`] or [`Shortcut::from_str`].
    pub fn new(modifiers: ModifierSet, key: impl Into<String>) -> Result<Self, ShortcutParseError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ShortcutParseError::MissingKey(render(&modifiers, "")));
        }
        if ModifierKey::from_label(&key).is_some() {
            return Err(ShortcutParseError::ModifierAsKey(key));
        }
        Ok(Self { modifiers, key })
    }

    /// Held modifiers.
    #[must_use]
    pub fn modifiers(&self) -> &ModifierSet {
        &self.modifiers
    }

    /// Trigger key label.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// True when `label` is the trigger key or one of the modifiers.
    #[must_use]
    pub fn involves(&self, label: &str) -> bool {
        self.key == label || self.modifiers.iter().any(|m| m.as_str() == label)
    }

    /// All labels this shortcut touches, modifiers first.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.modifiers
            .iter()
            .map(|m| -> &str { m.as_str() })
            .chain(std::iter::once(self.key.as_str()))
    }
}

fn render(modifiers: &ModifierSet, key: &str) -> String {
    modifiers
        .iter()
        .map(|m| -> &str { m.as_str() })
        .chain(std::iter::once(key))
        .collect::<Vec<_>>()
        .join(" + ")
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.modifiers, &self.key))
    }
}

/// Splits off the trigger key, treating a trailing `+` after a separator as
/// the `+` key itself.
fn split_trigger(text: &str) -> (&str, &str) {
    if let Some(rest) = text.strip_suffix('+') {
        let rest = rest.trim_end();
        if rest.is_empty() {
            return ("", "+");
        }
        if let Some(head) = rest.strip_suffix('+') {
            return (head, "+");
        }
    }

    match text.rsplit_once('+') {
        Some((head, key)) => (head, key.trim()),
        None => ("", text),
    }
}

impl FromStr for Shortcut {
    type Err = ShortcutParseError;

    /// Parses `"Ctrl+Shift+P"` or `"Ctrl + Shift + P"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(ShortcutParseError::Empty);
        }

        let (head, key) = split_trigger(text);
        if key.is_empty() {
            return Err(ShortcutParseError::MissingKey(text.to_string()));
        }

        let modifiers = if head.trim().is_empty() {
            ModifierSet::new()
        } else {
            head.split('+')
                .map(str::parse::<ModifierKey>)
                .collect::<Result<ModifierSet, _>>()?
        };

        Self::new(modifiers, canonical_key_label(key))
    }
}
