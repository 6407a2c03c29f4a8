//! Wishlist product model and tolerant JSON decoding.
//!
//! This crate owns the document shape published as `data.json` and shared by
//! the loader and the renderer. It does no I/O: callers hand it bytes and get
//! back an immutable [`Catalog`].
//!
//! DESIGN
//! ======
//! The producer of `data.json` is a separate script, so decoding leans
//! permissive: a missing or `null` `products` field is an empty list and a
//! product that omits a field gets an empty string for it. A body whose top
//! level is not a JSON object is rejected, as is a present field of the wrong
//! type.

use serde::Deserialize;

/// Error returned by [`decode_catalog`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The body is not valid JSON, or not an object of the expected shape.
    #[error("invalid catalog document: {0}")]
    Json(#[from] serde_json::Error),
    /// The body is valid JSON but its top level is not an object.
    #[error("invalid catalog document: expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

/// A single wishlist entry as published by the data producer.
///
/// Every field is a display string; nothing here is validated or unique.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Product {
    /// Display title.
    pub title: String,
    /// Link-out target on the store's site.
    pub url: String,
    /// Product image URL. May be unreachable.
    pub image: String,
    /// Pre-formatted price, e.g. `"R$ 299,90"`.
    pub price: String,
    /// Store domain or identifier, e.g. `"www.kabum.com.br"`.
    pub store: String,
}

/// The normalized product list plus its freshness marker.
///
/// A catalog is replaced wholesale on every successful load and never merged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Products in source order.
    pub products: Vec<Product>,
    /// Raw `last_updated` timestamp as written by the producer, if any.
    pub last_updated: Option<String>,
}

impl Catalog {
    #[must_use]
    pub fn new(products: Vec<Product>, last_updated: Option<String>) -> Self {
        Self { products, last_updated }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Decode a `data.json` body into a [`Catalog`].
///
/// # Errors
///
/// Returns [`DecodeError::Json`] when the body is not JSON or a present field
/// has the wrong type, and [`DecodeError::NotAnObject`] when the top level is
/// an array, string, number, boolean or `null`.
pub fn decode_catalog(bytes: &[u8]) -> Result<Catalog, DecodeError> {
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    if !value.is_object() {
        return Err(DecodeError::NotAnObject { found: json_kind(&value) });
    }
    let wire: WireCatalog = serde_json::from_value(value)?;
    Ok(wire.into())
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[derive(Deserialize)]
struct WireCatalog {
    #[serde(default)]
    last_updated: Option<String>,
    #[serde(default)]
    products: Option<Vec<Product>>,
}

impl From<WireCatalog> for Catalog {
    fn from(wire: WireCatalog) -> Self {
        Self {
            products: wire.products.unwrap_or_default(),
            last_updated: wire.last_updated,
        }
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
