use super::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;

const BODY: &str = r#"{
    "last_updated": "2025-03-19 10:00:00",
    "products": [
        {"title": "A", "url": "https://a.test", "image": "https://a.test/i.jpg", "price": "R$ 1,00", "store": "www.amazon.com.br"},
        {"title": "B", "url": "https://b.test", "image": "https://b.test/i.jpg", "price": "R$ 2,00", "store": "kabum.com.br"}
    ]
}"#;

#[derive(Clone, Default)]
struct Seen {
    stamps: Arc<Mutex<Vec<String>>>,
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}/wishlist/")
}

async fn catalog_handler(State(seen): State<Seen>, Query(params): Query<HashMap<String, String>>) -> &'static str {
    if let Some(stamp) = params.get(CACHE_BUST_PARAM) {
        seen.stamps.lock().expect("lock").push(stamp.clone());
    }
    BODY
}

fn timeouts() -> HttpTimeouts {
    HttpTimeouts { request: Duration::from_secs(5), connect: Duration::from_secs(2) }
}

#[test]
fn endpoint_resolves_data_json_under_base_directory() {
    let with_slash = catalog_endpoint("https://user.github.io/wishlist/").expect("url");
    let without_slash = catalog_endpoint("https://user.github.io/wishlist").expect("url");
    assert_eq!(with_slash.as_str(), "https://user.github.io/wishlist/data.json");
    assert_eq!(without_slash, with_slash);
}

#[test]
fn endpoint_keeps_explicit_json_document() {
    let url = catalog_endpoint("http://localhost:8000/feeds/wish.json?t=1").expect("url");
    assert_eq!(url.as_str(), "http://localhost:8000/feeds/wish.json");
}

#[test]
fn endpoint_rejects_non_http_schemes() {
    assert!(matches!(catalog_endpoint("ftp://host/"), Err(LoadError::InvalidUrl(_))));
    assert!(matches!(catalog_endpoint("not a url"), Err(LoadError::InvalidUrl(_))));
}

#[test]
fn request_url_appends_cache_bust_param() {
    let source = HttpCatalogSource::new("https://host/w/", timeouts()).expect("source");
    assert_eq!(source.request_url(42).as_str(), "https://host/w/data.json?t=42");
    assert_eq!(source.describe(), "https://host/w/data.json");
}

#[test]
fn cache_buster_is_strictly_increasing() {
    let buster = CacheBuster::new();
    assert_eq!(buster.next(1_000), 1_000);
    assert_eq!(buster.next(1_000), 1_001);
    // Clock stepped backwards.
    assert_eq!(buster.next(500), 1_002);
    assert_eq!(buster.next(5_000), 5_000);
}

#[test]
fn load_error_kinds_and_messages() {
    let status = LoadError::Status { status: 404 };
    assert_eq!(status.kind(), LoadErrorKind::Transport);
    assert_eq!(status.to_string(), "HTTP error! status: 404");

    let parse = LoadError::from(decode_catalog(b"nope").expect_err("invalid"));
    assert_eq!(parse.kind(), LoadErrorKind::Parse);
}

#[tokio::test]
async fn http_source_loads_catalog_with_distinct_stamps() {
    let seen = Seen::default();
    let router = Router::new()
        .route("/wishlist/data.json", get(catalog_handler))
        .with_state(seen.clone());
    let base = serve(router).await;
    let source = HttpCatalogSource::new(&base, timeouts()).expect("source");

    let first = source.load().await.expect("first load");
    let second = source.load().await.expect("second load");

    assert_eq!(first.len(), 2);
    assert_eq!(first.products[0].title, "A");
    assert_eq!(first, second);

    let stamps: Vec<u64> = seen
        .stamps
        .lock()
        .expect("lock")
        .iter()
        .map(|s| s.parse().expect("numeric stamp"))
        .collect();
    assert_eq!(stamps.len(), 2);
    assert!(stamps[1] > stamps[0]);
}

#[tokio::test]
async fn http_source_reports_status_failures() {
    let router = Router::new().route("/wishlist/data.json", get(|| async { StatusCode::NOT_FOUND }));
    let base = serve(router).await;
    let source = HttpCatalogSource::new(&base, timeouts()).expect("source");

    let err = source.load().await.expect_err("404");
    assert!(matches!(err, LoadError::Status { status: 404 }));
}

#[tokio::test]
async fn http_source_reports_parse_failures() {
    let router = Router::new().route("/wishlist/data.json", get(|| async { "<html>oops</html>" }));
    let base = serve(router).await;
    let source = HttpCatalogSource::new(&base, timeouts()).expect("source");

    let err = source.load().await.expect_err("bad body");
    assert_eq!(err.kind(), LoadErrorKind::Parse);
}

#[tokio::test]
async fn http_source_reports_transport_failures() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    let source = HttpCatalogSource::new(&format!("http://{addr}/"), timeouts()).expect("source");

    let err = source.load().await.expect_err("connection refused");
    assert!(matches!(err, LoadError::Transport(_)));
}

#[tokio::test]
async fn file_source_reads_local_document() {
    let dir = std::env::temp_dir().join(format!("wishlist-loader-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("mkdir");
    let path = dir.join("data.json");
    std::fs::write(&path, BODY).expect("write");

    let source = FileCatalogSource::new(&path);
    let catalog = source.load().await.expect("load");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.last_updated.as_deref(), Some("2025-03-19 10:00:00"));
    assert!(source.describe().ends_with("data.json"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn file_source_missing_file_is_io_error() {
    let source = FileCatalogSource::new("/definitely/not/here/data.json");
    let err = source.load().await.expect_err("missing");
    assert!(matches!(err, LoadError::Io { .. }));
    assert_eq!(err.kind(), LoadErrorKind::Transport);
}
