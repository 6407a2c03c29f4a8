//! Command-line and environment configuration for the `wishlist` binary.
//!
//! DESIGN
//! ======
//! Flags come from clap with `WISHLIST_*` environment fallbacks. HTTP timeouts
//! are tuning knobs rather than user-facing options, so they are read straight
//! from the environment with [`env_parse`].

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use client::net::loader::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS};
use client::{CardTemplate, CatalogSource, ClientConfig, FileCatalogSource, HttpCatalogSource, HttpTimeouts};
use tracing::debug;

use crate::CliError;
use crate::output::OutputTarget;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const PREFS_DIR: &str = "wishlist";
const PREFS_FILE: &str = "preferences.json";

#[derive(Parser, Debug)]
#[command(name = "wishlist", about = "Render a product wishlist from a static data.json")]
pub struct Cli {
    /// Site hosting `data.json`, e.g. https://user.github.io/wishlist/
    #[arg(long, env = "WISHLIST_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Read the catalog from a local file instead of over HTTP.
    #[arg(long, env = "WISHLIST_DATA_FILE", global = true)]
    pub data_file: Option<PathBuf>,

    /// Seconds between scheduled refreshes in `watch`.
    #[arg(long, env = "WISHLIST_REFRESH_SECS", default_value_t = 300, global = true)]
    pub refresh_secs: u64,

    /// Preference file [default: <config dir>/wishlist/preferences.json]
    #[arg(long, env = "WISHLIST_PREFS", global = true)]
    pub prefs: Option<PathBuf>,

    /// HTML output path, or - for stdout.
    #[arg(long, env = "WISHLIST_OUT", default_value = "wishlist.html", global = true)]
    pub out: OutputTarget,

    /// Card markup: rich or compact.
    #[arg(long, env = "WISHLIST_CARD_TEMPLATE", default_value = "rich", global = true)]
    pub card_template: CardTemplate,

    /// Maximum card title length before truncation.
    #[arg(long, env = "WISHLIST_TITLE_MAX", default_value_t = 80, global = true)]
    pub title_max: usize,

    /// Page heading.
    #[arg(long, env = "WISHLIST_TITLE", default_value = "My Wishlist", global = true)]
    pub title: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Load once, write the page, exit.
    Render,
    /// Keep the page fresh and take single-key commands on stdin.
    Watch,
    /// Flip the stored grid/list preference and print the new mode.
    Toggle,
}

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: Option<String>,
    pub data_file: Option<PathBuf>,
    pub timeouts: HttpTimeouts,
    pub refresh_period: Duration,
    pub prefs_path: PathBuf,
    pub output: OutputTarget,
    pub client: ClientConfig,
}

impl Settings {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            base_url: cli.base_url.clone().filter(|url| !url.trim().is_empty()),
            data_file: cli.data_file.clone(),
            timeouts: HttpTimeouts {
                request: Duration::from_secs(env_parse("WISHLIST_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)),
                connect: Duration::from_secs(env_parse("WISHLIST_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS)),
            },
            refresh_period: Duration::from_secs(cli.refresh_secs),
            prefs_path: cli.prefs.clone().unwrap_or_else(default_prefs_path),
            output: cli.out.clone(),
            client: ClientConfig {
                title: cli.title.clone(),
                title_max: cli.title_max,
                card_template: cli.card_template,
            },
        }
    }

    /// Build the configured catalog source. A data file wins over a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::MissingSource`] when neither is configured, or
    /// [`CliError::Source`] when the base URL is unusable.
    pub fn catalog_source(&self) -> Result<Box<dyn CatalogSource>, CliError> {
        if let Some(path) = &self.data_file {
            return Ok(Box::new(FileCatalogSource::new(path)));
        }
        let base_url = self.base_url.as_deref().ok_or(CliError::MissingSource)?;
        Ok(Box::new(HttpCatalogSource::new(base_url, self.timeouts)?))
    }
}

/// `<config dir>/wishlist/preferences.json`, or a file in the working
/// directory on platforms without a config dir.
#[must_use]
pub fn default_prefs_path() -> PathBuf {
    if let Some(dir) = dirs::config_dir() {
        dir.join(PREFS_DIR).join(PREFS_FILE)
    } else {
        debug!("no config dir; keeping preferences in the working directory");
        PathBuf::from(format!("{PREFS_DIR}-{PREFS_FILE}"))
    }
}

/// Parse an environment variable, falling back to `default` when it is unset
/// or malformed.
pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
