//! User configuration
//!
//! Edit this file to customize the cheatsheet layout and prefix key.

use crate::layout::Overflow;
use crossterm::event::{KeyCode, KeyModifiers};

// ============================================================================
// GENERAL SETTINGS
// ============================================================================

/// Width of a single column, in terminal cells
pub const COLUMN_WIDTH: usize = 25;

/// Blank cells between adjacent columns
pub const COLUMN_SPACING: usize = 2;

/// Terminal width used when the terminal cannot be queried
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Character repeated under each category name
pub const RULE_CHAR: char = '─';

/// What to do with blocks that do not fit once every column is used
pub const OVERFLOW: Overflow = Overflow::Drop;

// ============================================================================
// PREFIX KEY
// ============================================================================

/// Placeholder used in the shortcut dataset for the prefix chord
pub const PREFIX_PLACEHOLDER: &str = "Prefix";

/// The prefix key shown in place of the placeholder
/// Default: Ctrl+B (the tmux default)
pub const PREFIX_KEY: KeyCode = KeyCode::Char('b');
pub const PREFIX_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL;

/// Human-readable label for a key chord, e.g. `ctrl+b`
pub fn key_label(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts: Vec<String> = Vec::new();
    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("alt".to_string());
    }
    if modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("shift".to_string());
    }

    let key = match code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("f{}", n),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        other => format!("{:?}", other).to_lowercase(),
    };
    parts.push(key);

    parts.join("+")
}

/// Label for the configured prefix key
pub fn prefix_label() -> String {
    key_label(PREFIX_KEY, PREFIX_MODIFIERS)
}
