//! Terminal key capture through crossterm.
//!
//! Terminals report a key together with its modifier state instead of
//! separate modifier presses, so a single press event maps straight to a
//! [`Shortcut`].

use crate::models::{ModifierKey, ModifierSet, Shortcut};
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use tracing::debug;

/// Canonical label for a terminal key code, `None` for modifier-only or
/// unsupported codes.
#[must_use]
pub fn key_code_label(code: KeyCode) -> Option<String> {
    let label = match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_uppercase().collect(),
        KeyCode::F(n) => format!("F{n}"),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab | KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::CapsLock => "Caps Lock".to_string(),
        KeyCode::Menu => "Menu".to_string(),
        KeyCode::PrintScreen => "PrintScreen".to_string(),
        KeyCode::ScrollLock => "ScrollLock".to_string(),
        KeyCode::NumLock => "NumLock".to_string(),
        KeyCode::Pause => "Pause".to_string(),
        _ => return None,
    };
    Some(label)
}

/// Modifier set for a terminal modifier mask. `SUPER` and `META` both map
/// to `Win`; `HYPER` has no counterpart and is dropped.
#[must_use]
pub fn modifiers_from(mask: KeyModifiers) -> ModifierSet {
    let mut modifiers = ModifierSet::new();
    if mask.contains(KeyModifiers::CONTROL) {
        modifiers = modifiers.with(ModifierKey::Ctrl);
    }
    if mask.contains(KeyModifiers::ALT) {
        modifiers = modifiers.with(ModifierKey::Alt);
    }
    if mask.contains(KeyModifiers::SHIFT) {
        modifiers = modifiers.with(ModifierKey::Shift);
    }
    if mask.intersects(KeyModifiers::SUPER | KeyModifiers::META) {
        modifiers = modifiers.with(ModifierKey::Win);
    }
    modifiers
}

/// Converts a key press into a shortcut.
///
/// Release and repeat events, and presses of bare modifier keys, yield `None`.
/// `BackTab` is reported by terminals for Shift+Tab and always carries Shift.
#[must_use]
pub fn shortcut_from_event(event: &KeyEvent) -> Option<Shortcut> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    let key = key_code_label(event.code)?;
    let mut modifiers = modifiers_from(event.modifiers);
    if event.code == KeyCode::BackTab {
        modifiers = modifiers.with(ModifierKey::Shift);
    }

    Shortcut::new(modifiers, key).ok()
}

/// Reads key presses from the terminal until one forms a shortcut.
///
/// Returns `Ok(None)` when the user presses a bare `Esc`. Raw mode is
/// restored before returning, including on error.
pub fn record_shortcut() -> Result<Option<Shortcut>> {
    terminal::enable_raw_mode().context("Failed to enable raw mode")?;
    let result = read_shortcut();
    terminal::disable_raw_mode().context("Failed to restore terminal")?;
    result
}

fn read_shortcut() -> Result<Option<Shortcut>> {
    loop {
        let Event::Key(key) = event::read().context("Failed to read terminal event")? else {
            continue;
        };

        if key.code == KeyCode::Esc && key.modifiers.is_empty() {
            debug!("Recording cancelled");
            return Ok(None);
        }

        if let Some(shortcut) = shortcut_from_event(&key) {
            debug!("Recorded {}", shortcut);
            return Ok(Some(shortcut));
        }
    }
}
