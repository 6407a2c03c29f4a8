//! Wishlist application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` holds the controller, `view_mode` the persisted layout preference,
//! and `refresh` decides which load results are allowed to land.

pub mod app;
pub mod refresh;
pub mod view_mode;
