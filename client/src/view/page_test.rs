use super::*;
use crate::net::loader::LoadErrorKind;
use crate::state::app::Notice;
use catalog::{Catalog, Product};
use time::macros::datetime;

const NOW: OffsetDateTime = datetime!(2025-03-20 15:00:00 UTC);

fn product(title: &str) -> Product {
    Product {
        title: title.to_owned(),
        url: format!("https://shop.test/{title}"),
        image: format!("https://shop.test/{title}.jpg"),
        price: "R$ 1,00".to_owned(),
        store: "shop.test".to_owned(),
    }
}

fn loaded(products: Vec<Product>) -> AppState {
    AppState {
        catalog: Some(Catalog::new(products, Some("2025-03-19 10:00:00".to_owned()))),
        ..AppState::default()
    }
}

#[test]
fn before_first_load_shows_loading() {
    let page = build_page(&AppState::default(), &ClientConfig::default(), NOW);
    assert_eq!(page.listing, Listing::Loading);
    assert_eq!(page.counters.product_count, 0);
    assert_eq!(page.counters.last_updated, "unknown date");
}

#[test]
fn empty_catalog_shows_placeholder_and_zero_count() {
    let page = build_page(&loaded(Vec::new()), &ClientConfig::default(), NOW);
    assert_eq!(page.listing, Listing::Empty);
    assert!(page.listing.cards().is_empty());
    assert_eq!(page.counters.product_count, 0);
}

#[test]
fn cards_follow_source_order() {
    let page = build_page(&loaded(vec![product("A"), product("B"), product("C")]), &ClientConfig::default(), NOW);
    let cards = page.listing.cards();
    assert_eq!(cards.len(), 3);
    let hrefs: Vec<&str> = cards.iter().map(|c| c.link.href.as_str()).collect();
    assert_eq!(hrefs, ["https://shop.test/A", "https://shop.test/B", "https://shop.test/C"]);
    assert_eq!(cards[2].animation_delay_ms, 100);
    assert_eq!(page.counters.product_count, 3);
    assert_eq!(page.counters.last_updated, "yesterday");
}

#[test]
fn missing_timestamp_is_unknown_date() {
    let mut state = loaded(vec![product("A")]);
    if let Some(catalog) = state.catalog.as_mut() {
        catalog.last_updated = None;
    }
    let page = build_page(&state, &ClientConfig::default(), NOW);
    assert_eq!(page.counters.last_updated, "unknown date");
}

#[test]
fn notice_before_first_load_replaces_listing() {
    let state = AppState {
        notice: Some(Notice { kind: LoadErrorKind::Transport, message: "HTTP error! status: 404".to_owned() }),
        ..AppState::default()
    };
    let page = build_page(&state, &ClientConfig::default(), NOW);
    let Listing::Error(notice) = page.listing else {
        panic!("expected error listing");
    };
    assert_eq!(notice.retry_label, "Try again");
    assert_eq!(notice.message, "HTTP error! status: 404");
    assert_eq!(notice.heading, ERROR_HEADING);
}

#[test]
fn toggle_reflects_mode() {
    let grid = build_toggle(ViewMode::Grid);
    assert_eq!(grid.container_class, "grid-view");
    assert!(grid.grid_icon_visible);
    assert!(!grid.list_icon_visible);
    assert_eq!(grid.label, "List mode");

    let list = build_toggle(ViewMode::List);
    assert_eq!(list.container_class, "list-view");
    assert!(!list.grid_icon_visible);
    assert!(list.list_icon_visible);
    assert_eq!(list.label, "Grid mode");
}
