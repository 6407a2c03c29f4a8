//! Display-text helpers for product cards.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Default maximum title length shown on a card.
pub const DEFAULT_TITLE_MAX: usize = 80;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Cut `text` to at most `max_len` characters, appending [`ELLIPSIS`] when
/// anything was removed. Lengths count Unicode scalar values, not bytes.
#[must_use]
pub fn truncate_text(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        None => text.to_owned(),
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
    }
}
