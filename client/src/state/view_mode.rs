//! Grid/list layout mode and its persisted preference.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A store that cannot be read is treated as "no
//! preference" and an unrecognized stored value is ignored, so the page always
//! starts in a valid mode.

use std::fmt;
use std::str::FromStr;

use crate::util::preference::{PreferenceStore, StorageError};

#[cfg(test)]
#[path = "view_mode_test.rs"]
mod view_mode_test;

/// Preference key holding the persisted layout mode.
pub const VIEW_MODE_KEY: &str = "wishlist-view-mode";

/// Layout of the product listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Cards in a responsive grid.
    #[default]
    Grid,
    /// One card per row.
    List,
}

impl ViewMode {
    /// Stored/serialized form: `"grid"` or `"list"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }

    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }

    /// Layout class applied to the listing container.
    #[must_use]
    pub fn container_class(self) -> &'static str {
        match self {
            Self::Grid => "grid-view",
            Self::List => "list-view",
        }
    }

    /// Human label, e.g. for the toggle button.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Grid => "Grid",
            Self::List => "List",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown view mode: {0}")]
pub struct UnknownViewMode(pub String);

impl FromStr for ViewMode {
    type Err = UnknownViewMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "grid" => Ok(Self::Grid),
            "list" => Ok(Self::List),
            other => Err(UnknownViewMode(other.to_owned())),
        }
    }
}

/// Read the persisted mode.
///
/// Returns `Ok(None)` when nothing is stored or the stored value is not a
/// known mode.
///
/// # Errors
///
/// Returns [`StorageError`] when the store itself cannot be read.
pub fn read_preference(store: &dyn PreferenceStore) -> Result<Option<ViewMode>, StorageError> {
    Ok(store.get(VIEW_MODE_KEY)?.and_then(|raw| raw.parse().ok()))
}

/// Persist `mode` under [`VIEW_MODE_KEY`].
///
/// # Errors
///
/// Returns [`StorageError`] when the store cannot be written.
pub fn persist(store: &dyn PreferenceStore, mode: ViewMode) -> Result<(), StorageError> {
    store.set(VIEW_MODE_KEY, mode.as_str())
}
