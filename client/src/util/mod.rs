//! Utility helpers shared across the wishlist client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Formatting helpers are pure functions; `preference` and `schedule` are the
//! environment capabilities the controller is driven through.

pub mod date;
pub mod preference;
pub mod schedule;
pub mod shortcuts;
pub mod store_name;
pub mod text;
