//! `wishlist`: render a product wishlist page from a static `data.json`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Thin glue over the `client` crate. `render` loads once and writes the page,
//! `watch` keeps it fresh on a timer and takes single-key commands on stdin,
//! `toggle` flips the stored layout preference.
//!
//! ERROR HANDLING
//! ==============
//! Only startup problems (no source, bad URL, template compile) end the
//! process with an error. Load and storage failures are handled by the
//! controller and show up in the page or the log.

mod config;
mod input;
mod output;
mod watch;

use std::sync::Arc;

use clap::Parser;
use client::state::refresh::Trigger;
use client::util::date::local_now;
use client::{Controller, HtmlPainter, JsonFileStore, LoadError, LoadOutcome, RenderError};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{Cli, Command, Settings};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("no catalog source; pass --base-url or --data-file (or set WISHLIST_BASE_URL)")]
    MissingSource,
    #[error("catalog source setup failed: {0}")]
    Source(#[from] LoadError),
    #[error("page template setup failed: {0}")]
    Render(#[from] RenderError),
    #[error("failed to write {target}: {source}")]
    Output {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli);

    match cli.command {
        Command::Render => run_render(&settings).await,
        Command::Watch => watch::run(&settings).await,
        Command::Toggle => {
            run_toggle(&settings);
            Ok(())
        }
    }
}

async fn run_render(settings: &Settings) -> Result<(), CliError> {
    let source = settings.catalog_source()?;
    let painter = HtmlPainter::new()?;
    let store = Arc::new(JsonFileStore::new(&settings.prefs_path));
    let mut controller = Controller::new(settings.client.clone(), store);
    controller.restore_preference();

    match controller.run_cycle(source.as_ref(), Trigger::Scheduled, true).await {
        Some(LoadOutcome::Applied { products }) => info!(products, source = %source.describe(), "rendering"),
        outcome => warn!(?outcome, source = %source.describe(), "rendering without a fresh catalog"),
    }

    let html = painter.paint(&controller.view(local_now()))?;
    settings
        .output
        .write_page(&html)
        .await
        .map_err(|source| CliError::Output { target: settings.output.to_string(), source })?;
    Ok(())
}

fn run_toggle(settings: &Settings) {
    let store = Arc::new(JsonFileStore::new(&settings.prefs_path));
    let mut controller = Controller::new(settings.client.clone(), store);
    controller.restore_preference();
    let mode = controller.toggle_view_mode();
    info!(%mode, prefs = %settings.prefs_path.display(), "view preference saved");
    println!("{mode}");
}
