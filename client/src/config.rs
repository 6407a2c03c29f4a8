//! Rendering options shared by the view builder and the HTML painter.

use std::str::FromStr;

use crate::util::text::DEFAULT_TITLE_MAX;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Which card markup to paint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardTemplate {
    /// Image, store badge, title, price and a "View in store" button.
    #[default]
    Rich,
    /// Image, title, price and a plain link.
    Compact,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown card template `{0}` (expected `rich` or `compact`)")]
pub struct UnknownCardTemplate(pub String);

impl FromStr for CardTemplate {
    type Err = UnknownCardTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rich" => Ok(Self::Rich),
            "compact" => Ok(Self::Compact),
            _ => Err(UnknownCardTemplate(s.to_owned())),
        }
    }
}

/// Presentation knobs for one rendered page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Page heading.
    pub title: String,
    /// Maximum title length on a card before truncation.
    pub title_max: usize,
    pub card_template: CardTemplate,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            title: "My Wishlist".to_owned(),
            title_max: DEFAULT_TITLE_MAX,
            card_template: CardTemplate::default(),
        }
    }
}
