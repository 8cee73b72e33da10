//! Static physical keyboard layout used for display.
//!
//! Key labels are the same canonical labels the store and key capture use,
//! so a key is highlighted by comparing its label with a binding's labels.

/// Visual role of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Letters, digits, punctuation
    Standard,
    /// F1-F12
    Function,
    /// Ctrl, Alt, Shift, Win
    Modifier,
    /// Esc, Tab, Enter, Backspace and friends
    Special,
    /// Empty gap between key groups
    Spacer,
}

/// One key position in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySpec {
    /// Canonical label (empty for spacers)
    pub label: &'static str,
    /// Label printed for the shifted character, if any
    pub shifted: Option<&'static str>,
    /// Width in quarter units (4 = one standard key)
    pub width: u8,
    /// Visual role
    pub kind: KeyKind,
}

const fn key(label: &'static str, width: u8, kind: KeyKind) -> KeySpec {
    KeySpec {
        label,
        shifted: None,
        width,
        kind,
    }
}

const fn std_key(label: &'static str) -> KeySpec {
    key(label, 4, KeyKind::Standard)
}

const fn shifted(label: &'static str, shifted: &'static str) -> KeySpec {
    KeySpec {
        label,
        shifted: Some(shifted),
        width: 4,
        kind: KeyKind::Standard,
    }
}

const fn fn_key(label: &'static str) -> KeySpec {
    key(label, 4, KeyKind::Function)
}

const fn modifier(label: &'static str, width: u8) -> KeySpec {
    key(label, width, KeyKind::Modifier)
}

const fn special(label: &'static str, width: u8) -> KeySpec {
    key(label, width, KeyKind::Special)
}

const fn gap(width: u8) -> KeySpec {
    key("", width, KeyKind::Spacer)
}

/// Main block of a 105-key ISO keyboard, top row first.
pub const ISO_105: &[&[KeySpec]] = &[
    &[
        special("Esc", 4),
        gap(4),
        fn_key("F1"),
        fn_key("F2"),
        fn_key("F3"),
        fn_key("F4"),
        gap(2),
        fn_key("F5"),
        fn_key("F6"),
        fn_key("F7"),
        fn_key("F8"),
        gap(2),
        fn_key("F9"),
        fn_key("F10"),
        fn_key("F11"),
        fn_key("F12"),
    ],
    &[
        shifted("`", "~"),
        shifted("1", "!"),
        shifted("2", "@"),
        shifted("3", "#"),
        shifted("4", "$"),
        shifted("5", "%"),
        shifted("6", "^"),
        shifted("7", "&"),
        shifted("8", "*"),
        shifted("9", "("),
        shifted("0", ")"),
        shifted("-", "_"),
        shifted("=", "+"),
        special("Backspace", 8),
    ],
    &[
        special("Tab", 6),
        std_key("Q"),
        std_key("W"),
        std_key("E"),
        std_key("R"),
        std_key("T"),
        std_key("Y"),
        std_key("U"),
        std_key("I"),
        std_key("O"),
        std_key("P"),
        shifted("[", "{"),
        shifted("]", "}"),
        shifted("\\", "|"),
    ],
    &[
        special("Caps Lock", 7),
        std_key("A"),
        std_key("S"),
        std_key("D"),
        std_key("F"),
        std_key("G"),
        std_key("H"),
        std_key("J"),
        std_key("K"),
        std_key("L"),
        shifted(";", ":"),
        shifted("'", "\""),
        special("Enter", 9),
    ],
    &[
        modifier("Shift", 9),
        std_key("Z"),
        std_key("X"),
        std_key("C"),
        std_key("V"),
        std_key("B"),
        std_key("N"),
        std_key("M"),
        shifted(",", "<"),
        shifted(".", ">"),
        shifted("/", "?"),
        modifier("Shift", 11),
    ],
    &[
        modifier("Ctrl", 5),
        modifier("Win", 5),
        modifier("Alt", 5),
        special("Space", 25),
        modifier("Alt", 5),
        modifier("Win", 5),
        special("Menu", 5),
        modifier("Ctrl", 5),
    ],
];

/// True when `label` appears anywhere on the layout.
#[must_use]
pub fn contains_label(layout: &[&[KeySpec]], label: &str) -> bool {
    layout
        .iter()
        .flat_map(|row| row.iter())
        .any(|k| k.kind != KeyKind::Spacer && k.label == label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModifierKey;

    #[test]
    fn test_layout_has_every_modifier() {
        for modifier in ModifierKey::ALL {
            assert!(contains_label(ISO_105, modifier.as_str()), "missing {modifier}");
        }
    }

    #[test]
    fn test_layout_has_letters_and_digits() {
        for c in ('A'..='Z').chain('0'..='9') {
            assert!(contains_label(ISO_105, &c.to_string()), "missing {c}");
        }
        assert!(!contains_label(ISO_105, ""));
    }
}
