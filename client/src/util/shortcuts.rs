//! Keyboard shortcuts for the wishlist page.

#[cfg(test)]
#[path = "shortcuts_test.rs"]
mod shortcuts_test;

/// Modifier keys held while a key was pressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Self = Self { ctrl: false, meta: false, alt: false, shift: false };

    /// Ctrl, Meta or Alt held. Shift alone does not count.
    #[must_use]
    pub fn has_command_modifier(self) -> bool {
        self.ctrl || self.meta || self.alt
    }
}

/// Page action bound to a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// `V`: switch between grid and list layout.
    ToggleView,
    /// `R`: reload the catalog now.
    Reload,
}

#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct ShortcutRow {
    pub key: &'static str,
    pub action: &'static str,
}

pub const SHORTCUTS: &[ShortcutRow] = &[
    ShortcutRow { key: "V", action: "Toggle grid/list" },
    ShortcutRow { key: "R", action: "Reload data" },
];

/// Resolve a key press to a shortcut. Case-insensitive; any Ctrl, Meta or Alt
/// modifier disables the binding so browser/terminal chords pass through.
#[must_use]
pub fn shortcut_for(key: char, modifiers: Modifiers) -> Option<Shortcut> {
    if modifiers.has_command_modifier() {
        return None;
    }
    match key.to_ascii_lowercase() {
        'v' => Some(Shortcut::ToggleView),
        'r' => Some(Shortcut::Reload),
        _ => None,
    }
}
