//! Catalog loading from `data.json`.
//!
//! DESIGN
//! ======
//! `CatalogSource` is the seam between the controller and the outside world.
//! `HttpCatalogSource` fetches `<base>/data.json?t=<millis>` so intermediary
//! caches never serve a stale document; `FileCatalogSource` reads the same
//! document from disk for pages opened without a web server.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as a [`LoadError`]; nothing panics past `load`.
//! Deciding what the user sees is the controller's job.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use catalog::{Catalog, DecodeError, decode_catalog};
use reqwest::Url;
use reqwest::header::CACHE_CONTROL;
use tracing::debug;

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

/// Resource path of the catalog document, relative to the base URL.
pub const DATA_PATH: &str = "data.json";
/// Query parameter carrying the cache-defeating stamp.
pub const CACHE_BUST_PARAM: &str = "t";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// ERRORS
// =============================================================================

/// Why a catalog load failed.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The configured base URL cannot address the catalog.
    #[error("invalid catalog URL: {0}")]
    InvalidUrl(String),
    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
    /// The request never produced a response (DNS, connect, timeout, reset).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },
    /// The local catalog file could not be read.
    #[error("could not read {path}: {message}")]
    Io { path: String, message: String },
    /// The body is not a catalog document.
    #[error("invalid response body: {0}")]
    Parse(#[from] DecodeError),
}

/// User-facing class of a [`LoadError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadErrorKind {
    Transport,
    Parse,
}

impl LoadError {
    #[must_use]
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            Self::Parse(_) => LoadErrorKind::Parse,
            Self::InvalidUrl(_) | Self::HttpClientBuild(_) | Self::Transport(_) | Self::Status { .. } | Self::Io { .. } => {
                LoadErrorKind::Transport
            }
        }
    }
}

// =============================================================================
// SOURCE TRAIT
// =============================================================================

/// Anything that can produce a fresh [`Catalog`]. Enables mocking in tests.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch and normalize the catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] for transport, status, I/O or parse failures.
    async fn load(&self) -> Result<Catalog, LoadError>;

    /// Short human-readable location, for logs.
    fn describe(&self) -> String;
}

// =============================================================================
// CACHE BUSTING
// =============================================================================

/// Produces strictly increasing stamps from wall-clock milliseconds.
///
/// Two loads within the same millisecond, or after the clock steps backwards,
/// still get distinct, increasing values.
#[derive(Debug, Default)]
pub struct CacheBuster {
    last: AtomicU64,
}

impl CacheBuster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Next stamp given the current time in milliseconds since the epoch.
    pub fn next(&self, now_ms: u64) -> u64 {
        let mut current = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now_ms.max(current.saturating_add(1));
            match self.last.compare_exchange_weak(current, candidate, Ordering::Relaxed, Ordering::Relaxed) {
                Ok(_) => return candidate,
                Err(actual) => current = actual,
            }
        }
    }
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

// =============================================================================
// HTTP SOURCE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request: Duration,
    pub connect: Duration,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self {
            request: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

/// Fetches `data.json` relative to a base URL over HTTP(S).
pub struct HttpCatalogSource {
    http: reqwest::Client,
    endpoint: Url,
    buster: CacheBuster,
}

impl HttpCatalogSource {
    /// Build a source for `base_url`, e.g. `https://user.github.io/wishlist/`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidUrl`] if the base is not an absolute http(s)
    /// URL, or [`LoadError::HttpClientBuild`] if the client fails to build.
    pub fn new(base_url: &str, timeouts: HttpTimeouts) -> Result<Self, LoadError> {
        let endpoint = catalog_endpoint(base_url)?;
        let http = reqwest::Client::builder()
            .timeout(timeouts.request)
            .connect_timeout(timeouts.connect)
            .build()
            .map_err(|e| LoadError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint, buster: CacheBuster::new() })
    }

    /// The catalog URL carrying cache-busting `stamp`.
    #[must_use]
    pub fn request_url(&self, stamp: u64) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair(CACHE_BUST_PARAM, &stamp.to_string());
        url
    }
}

#[async_trait::async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn load(&self) -> Result<Catalog, LoadError> {
        let url = self.request_url(self.buster.next(unix_millis()));
        debug!(%url, "fetching catalog");

        let response = self
            .http
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status { status: status.as_u16() });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;
        Ok(decode_catalog(&body)?)
    }

    fn describe(&self) -> String {
        self.endpoint.to_string()
    }
}

/// Resolve [`DATA_PATH`] against `base_url`.
///
/// A base without a trailing slash is treated as a directory, so
/// `https://host/wishlist` and `https://host/wishlist/` both address
/// `https://host/wishlist/data.json`. A base that already names a `.json`
/// document is used as-is.
///
/// # Errors
///
/// Returns [`LoadError::InvalidUrl`] for unparsable or non-http(s) bases.
pub fn catalog_endpoint(base_url: &str) -> Result<Url, LoadError> {
    let mut base = Url::parse(base_url.trim()).map_err(|e| LoadError::InvalidUrl(format!("{base_url}: {e}")))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(LoadError::InvalidUrl(format!("{base_url}: scheme must be http or https")));
    }
    base.set_query(None);
    base.set_fragment(None);
    if base.path().ends_with(".json") {
        return Ok(base);
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(DATA_PATH).map_err(|e| LoadError::InvalidUrl(format!("{base_url}: {e}")))
}

// =============================================================================
// FILE SOURCE
// =============================================================================

/// Reads a catalog document from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl CatalogSource for FileCatalogSource {
    async fn load(&self) -> Result<Catalog, LoadError> {
        debug!(path = %self.path.display(), "reading catalog");
        let body = tokio::fs::read(&self.path).await.map_err(|e| LoadError::Io {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(decode_catalog(&body)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
