//! Wishlist client: load, normalize and render a product wishlist.
//!
//! SYSTEM CONTEXT
//! ==============
//! `net` fetches `data.json`, `state` owns the controller and layout mode,
//! `view` describes the page and `render` paints it. Environment access goes
//! through the `util::preference` and `util::schedule` capabilities so every
//! stage can be exercised without a browser or a terminal.

pub mod config;
pub mod net;
pub mod render;
pub mod state;
pub mod util;
pub mod view;

pub use config::{CardTemplate, ClientConfig};
pub use net::loader::{CatalogSource, FileCatalogSource, HttpCatalogSource, HttpTimeouts, LoadError};
pub use render::html::{HtmlPainter, RenderError};
pub use state::app::{AppState, Controller, LoadOutcome};
pub use state::view_mode::ViewMode;
pub use util::preference::{JsonFileStore, MemoryStore, PreferenceStore, StorageError};
