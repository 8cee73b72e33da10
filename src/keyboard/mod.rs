//! Virtual keyboard: a static physical layout and a text renderer that
//! highlights keys used by bindings.

pub mod layout;
pub mod renderer;

pub use layout::{KeyKind, KeySpec, ISO_105};
pub use renderer::{render_keyboard, Highlights, KeyStyle};

use crate::services::KeyIndex;

/// Highlights for every key with a binding, plus an optional selected key.
#[must_use]
pub fn highlights_from_index(index: &KeyIndex, selected: Option<&str>) -> Highlights {
    Highlights {
        bound: index.bound_keys().into_iter().map(str::to_string).collect(),
        selected: selected.map(str::to_string),
    }
}
