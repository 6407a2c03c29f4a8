use super::*;
use crate::config::ClientConfig;
use crate::net::loader::LoadErrorKind;
use crate::state::app::{AppState, Notice};
use crate::state::view_mode::ViewMode;
use crate::view::FALLBACK_IMAGE;
use crate::view::page::build_page;
use catalog::{Catalog, Product};
use time::OffsetDateTime;
use time::macros::datetime;

const NOW: OffsetDateTime = datetime!(2025-03-20 15:00:00 UTC);

fn painter() -> HtmlPainter {
    HtmlPainter::new().expect("templates compile")
}

fn state_with(products: Vec<Product>) -> AppState {
    AppState {
        catalog: Some(Catalog::new(products, Some("2025-03-01".to_owned()))),
        ..AppState::default()
    }
}

fn product(title: &str, url: &str) -> Product {
    Product {
        title: title.to_owned(),
        url: url.to_owned(),
        image: "https://img.test/a.jpg".to_owned(),
        price: "R$ 10,00".to_owned(),
        store: "www.mercadolivre.com.br".to_owned(),
    }
}

fn paint(state: &AppState, config: &ClientConfig) -> String {
    painter().paint(&build_page(state, config, NOW)).expect("paint")
}

#[test]
fn cards_render_in_order_with_safe_links() {
    let state = state_with(vec![product("First", "https://a.test/1"), product("Second", "https://a.test/2")]);
    let html = paint(&state, &ClientConfig::default());

    assert_eq!(html.matches("<article class=\"product-card\"").count(), 2);
    let first = html.find("https://a.test/1").expect("first link");
    let second = html.find("https://a.test/2").expect("second link");
    assert!(first < second);
    assert_eq!(html.matches("target=\"_blank\" rel=\"noopener noreferrer\"").count(), 2);
    assert!(html.contains("Mercado Livre"));
    assert!(html.contains("loading=\"lazy\""));
    assert!(html.contains("animation-delay: 50ms"));
    assert!(html.contains("01/03/2025"));
}

#[test]
fn product_strings_are_escaped() {
    let state = state_with(vec![product("<script>alert(1)</script>", "https://a.test/?q=\"x\"")]);
    let html = paint(&state, &ClientConfig::default());

    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("q=\"x\""));
}

#[test]
fn image_falls_back_on_error() {
    let html = paint(&state_with(vec![product("A", "https://a.test")]), &ClientConfig::default());
    assert!(html.contains("onerror=\"this.onerror=null;this.src="));
    assert!(html.contains("via.placeholder.com"));
    assert!(FALLBACK_IMAGE.starts_with("https://via.placeholder.com"));
}

#[test]
fn compact_template_omits_store_badge() {
    let config = ClientConfig { card_template: CardTemplate::Compact, ..ClientConfig::default() };
    let html = paint(&state_with(vec![product("A", "https://a.test")]), &config);
    assert!(html.contains("product-card compact"));
    assert!(!html.contains("product-store-badge\">"));

    let rich = paint(&state_with(vec![product("A", "https://a.test")]), &ClientConfig::default());
    assert!(rich.contains("product-store-badge\">Mercado Livre"));
}

#[test]
fn empty_catalog_shows_placeholder() {
    let html = paint(&state_with(Vec::new()), &ClientConfig::default());
    assert!(html.contains("id=\"emptyState\""));
    assert!(html.contains("<strong id=\"productCount\">0</strong>"));
    assert!(!html.contains("<article"));
}

#[test]
fn loading_state_before_first_load() {
    let html = paint(&AppState::default(), &ClientConfig::default());
    assert!(html.contains("Loading products..."));
    assert!(!html.contains("id=\"emptyState\""));
}

#[test]
fn error_notice_has_retry_control() {
    let state = AppState {
        notice: Some(Notice { kind: LoadErrorKind::Transport, message: "HTTP error! status: 404".to_owned() }),
        ..AppState::default()
    };
    let html = paint(&state, &ClientConfig::default());
    assert!(html.contains("role=\"alert\""));
    assert!(html.contains("HTTP error! status: 404"));
    assert!(html.contains(">Try again</button>"));
}

#[test]
fn list_mode_hides_grid_icon_and_fades() {
    let state = AppState { view_mode: ViewMode::List, transition_seq: 1, ..state_with(Vec::new()) };
    let html = paint(&state, &ClientConfig::default());
    assert!(html.contains("class=\"list-view fade-a\""));
    assert!(html.contains("class=\"grid-icon hidden\""));
    assert!(html.contains("class=\"list-icon\""));
    assert!(html.contains("Grid mode"));
}

#[test]
fn footer_lists_shortcuts() {
    let html = paint(&AppState::default(), &ClientConfig::default());
    assert!(html.contains("<kbd>V</kbd>"));
    assert!(html.contains("<kbd>R</kbd>"));
}

#[test]
fn fade_class_alternates() {
    assert_eq!(fade_class(0), None);
    assert_eq!(fade_class(1), Some("fade-a"));
    assert_eq!(fade_class(2), Some("fade-b"));
    assert_eq!(fade_class(3), Some("fade-a"));
}
