//! Pure description of the wishlist page.
//!
//! DESIGN
//! ======
//! `page::build_page` turns application state into a [`PageView`]; nothing in
//! this module touches I/O or markup. The painter in `render` is the only
//! consumer, so the same view can be checked in tests without parsing HTML.

pub mod card;
pub mod page;

use serde::Serialize;

use crate::config::CardTemplate;
use crate::net::loader::LoadErrorKind;

/// Image shown when a product image fails to load.
pub const FALLBACK_IMAGE: &str = "https://via.placeholder.com/400x400/1a1a2e/eee?text=Image+Unavailable";
/// Label of the retry control shown with a load error.
pub const RETRY_LABEL: &str = "Try again";
/// Per-card entrance delay step.
pub const ANIMATION_STEP_MS: u64 = 50;

/// Everything needed to paint one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageView {
    pub title: String,
    pub toggle: ToggleView,
    pub counters: Counters,
    pub listing: Listing,
    pub card_template: CardTemplate,
    /// Bumped on every layout toggle; painters use its parity to restart the
    /// fade transition.
    pub transition_seq: u64,
}

/// Layout toggle control plus the container class it drives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ToggleView {
    pub container_class: &'static str,
    pub grid_icon_visible: bool,
    pub list_icon_visible: bool,
    /// Names the mode a click switches to.
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Counters {
    pub product_count: usize,
    pub last_updated: String,
}

/// Body of the product area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Listing {
    /// First load has not completed yet.
    Loading,
    /// Loaded, but the catalog has no products.
    Empty,
    Cards(Vec<CardView>),
    /// First load failed; shown in place of the listing.
    Error(NoticeView),
}

impl Listing {
    #[must_use]
    pub fn cards(&self) -> &[CardView] {
        match self {
            Self::Cards(cards) => cards,
            _ => &[],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NoticeView {
    #[serde(skip)]
    pub kind: LoadErrorKind,
    pub heading: String,
    pub message: String,
    pub retry_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub store_label: String,
    pub title_short: String,
    /// Untruncated title, used as the tooltip and image alt text.
    pub title_full: String,
    pub price: String,
    pub image: ImageView,
    pub link: LinkView,
    pub animation_delay_ms: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImageView {
    pub src: String,
    pub fallback: &'static str,
    pub lazy: bool,
}

/// Outbound link. Always opens a new browsing context without opener or
/// referrer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LinkView {
    pub href: String,
    pub target: &'static str,
    pub rel: &'static str,
    pub aria_label: String,
}
