//! Single-key commands read from stdin in `watch` mode.
//!
//! Each line is one key, optionally prefixed with modifier chords such as
//! `ctrl+v`. Page shortcuts go through [`shortcut_for`], so a held Ctrl, Meta
//! or Alt disables them exactly as on the web page.

use client::util::shortcuts::{Modifiers, Shortcut, shortcut_for};

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCommand {
    Shortcut(Shortcut),
    /// Flip page visibility; hidden pages skip scheduled refreshes.
    ToggleVisibility,
    Quit,
}

/// Glue-only keys, listed after the page shortcuts in the banner.
pub const EXTRA_KEYS: &[(&str, &str)] = &[("H", "Hide/show (pauses auto-refresh)"), ("Q", "Quit")];

/// Interpret one stdin line. Unrecognized input is `None`.
#[must_use]
pub fn parse_command(line: &str) -> Option<InputCommand> {
    let line = line.trim();
    let mut modifiers = Modifiers::NONE;
    let mut parts = line.split('+').map(str::trim).peekable();
    let mut key = None;

    while let Some(part) = parts.next() {
        if parts.peek().is_none() {
            key = Some(part);
            break;
        }
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers.ctrl = true,
            "meta" | "cmd" | "super" => modifiers.meta = true,
            "alt" | "option" => modifiers.alt = true,
            "shift" => modifiers.shift = true,
            _ => return None,
        }
    }

    let mut chars = key?.chars();
    let ch = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    if let Some(shortcut) = shortcut_for(ch, modifiers) {
        return Some(InputCommand::Shortcut(shortcut));
    }
    if modifiers.has_command_modifier() {
        return None;
    }
    match ch.to_ascii_lowercase() {
        'h' => Some(InputCommand::ToggleVisibility),
        'q' => Some(InputCommand::Quit),
        _ => None,
    }
}
