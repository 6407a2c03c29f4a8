//! Page view builder.

use time::OffsetDateTime;

use super::card::build_card;
use super::{Counters, Listing, NoticeView, PageView, RETRY_LABEL, ToggleView};
use crate::config::ClientConfig;
use crate::state::app::AppState;
use crate::state::view_mode::ViewMode;
use crate::util::date::format_last_updated;

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

pub const ERROR_HEADING: &str = "Could not load products";

/// Describe the whole page for `state` as of `now`.
#[must_use]
pub fn build_page(state: &AppState, config: &ClientConfig, now: OffsetDateTime) -> PageView {
    let last_updated = state.catalog.as_ref().and_then(|c| c.last_updated.as_deref());

    PageView {
        title: config.title.clone(),
        toggle: build_toggle(state.view_mode),
        counters: Counters {
            product_count: state.catalog.as_ref().map_or(0, catalog::Catalog::len),
            last_updated: format_last_updated(last_updated, now),
        },
        listing: build_listing(state, config),
        card_template: config.card_template,
        transition_seq: state.transition_seq,
    }
}

/// Toggle control for `mode`. The label names the mode a click switches to.
#[must_use]
pub fn build_toggle(mode: ViewMode) -> ToggleView {
    ToggleView {
        container_class: mode.container_class(),
        grid_icon_visible: mode == ViewMode::Grid,
        list_icon_visible: mode == ViewMode::List,
        label: format!("{} mode", mode.toggled().label()),
    }
}

fn build_listing(state: &AppState, config: &ClientConfig) -> Listing {
    match (&state.catalog, &state.notice) {
        (Some(catalog), _) if catalog.is_empty() => Listing::Empty,
        (Some(catalog), _) => Listing::Cards(
            catalog
                .products
                .iter()
                .enumerate()
                .map(|(index, product)| build_card(product, index, config))
                .collect(),
        ),
        (None, Some(notice)) => Listing::Error(NoticeView {
            kind: notice.kind,
            heading: ERROR_HEADING.to_owned(),
            message: notice.message.clone(),
            retry_label: RETRY_LABEL,
        }),
        (None, None) => Listing::Loading,
    }
}
