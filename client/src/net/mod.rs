//! Networking for the wishlist client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `loader` owns the only I/O the pipeline performs: fetching `data.json`.

pub mod loader;
