//! Box-drawing renderer for the virtual keyboard.
//!
//! Each key is drawn as its own box. Keys with at least one binding use a
//! double-line box and the selected key a heavy box:
//!
//! ```text
//! ┌────┐╔════╗┏━━━━┓
//! │Esc │║F1  ║┃F2  ┃
//! └────┘╚════╝┗━━━━┛
//! ```
//!
//! Keys with a shifted character show it after the label (`1 !`).

use crate::keyboard::layout::{KeyKind, KeySpec};
use std::collections::BTreeSet;

/// How a key box is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStyle {
    /// No binding uses the key
    Plain,
    /// At least one binding uses the key
    Bound,
    /// The key currently selected or queried
    Selected,
}

/// Which keys to emphasize.
#[derive(Debug, Clone, Default)]
pub struct Highlights {
    /// Labels used by at least one binding
    pub bound: BTreeSet<String>,
    /// Label being inspected, drawn over `bound`
    pub selected: Option<String>,
}

impl Highlights {
    /// Style for a key label.
    #[must_use]
    pub fn style_for(&self, label: &str) -> KeyStyle {
        if self.selected.as_deref() == Some(label) {
            KeyStyle::Selected
        } else if self.bound.contains(label) {
            KeyStyle::Bound
        } else {
            KeyStyle::Plain
        }
    }
}

struct BoxChars {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
}

const fn box_chars(style: KeyStyle) -> BoxChars {
    match style {
        KeyStyle::Plain => BoxChars {
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            horizontal: '─',
            vertical: '│',
        },
        KeyStyle::Bound => BoxChars {
            top_left: '╔',
            top_right: '╗',
            bottom_left: '╚',
            bottom_right: '╝',
            horizontal: '═',
            vertical: '║',
        },
        KeyStyle::Selected => BoxChars {
            top_left: '┏',
            top_right: '┓',
            bottom_left: '┗',
            bottom_right: '┛',
            horizontal: '━',
            vertical: '┃',
        },
    }
}

/// Inner character width for a key of `width` quarter units.
fn inner_width(width: u8) -> usize {
    (usize::from(width) * 5).div_ceil(4).max(1)
}

/// Text drawn inside a key box, cut to `inner` characters.
fn key_caption(key: &KeySpec, inner: usize) -> String {
    let caption = match key.shifted {
        Some(shifted) => format!("{} {}", key.label, shifted),
        None => key.label.to_string(),
    };
    caption.chars().take(inner).collect()
}

/// Renders `layout` as three text lines per row.
#[must_use]
pub fn render_keyboard(layout: &[&[KeySpec]], highlights: &Highlights) -> String {
    let mut output = String::new();

    for row in layout {
        let mut top = String::new();
        let mut middle = String::new();
        let mut bottom = String::new();

        for key in *row {
            let inner = inner_width(key.width);

            if key.kind == KeyKind::Spacer {
                let blank = " ".repeat(inner + 2);
                top.push_str(&blank);
                middle.push_str(&blank);
                bottom.push_str(&blank);
                continue;
            }

            let chars = box_chars(highlights.style_for(key.label));
            let rule: String = std::iter::repeat(chars.horizontal).take(inner).collect();

            top.push(chars.top_left);
            top.push_str(&rule);
            top.push(chars.top_right);

            let caption = key_caption(key, inner);
            middle.push(chars.vertical);
            middle.push_str(&format!("{caption:<inner$}"));
            middle.push(chars.vertical);

            bottom.push(chars.bottom_left);
            bottom.push_str(&rule);
            bottom.push(chars.bottom_right);
        }

        for line in [top, middle, bottom] {
            output.push_str(line.trim_end());
            output.push('\n');
        }
    }

    output
}
