//! Store display names derived from product domains.

#[cfg(test)]
#[path = "store_name_test.rs"]
mod store_name_test;

/// Brands whose display name differs from a plain capitalized domain label.
const KNOWN_STORES: &[(&str, &str)] = &[
    ("amazon", "Amazon"),
    ("mercadolivre", "Mercado Livre"),
    ("magazineluiza", "Magalu"),
    ("kabum", "KaBuM!"),
    ("shopee", "Shopee"),
    ("aliexpress", "AliExpress"),
    ("americanas", "Americanas"),
    ("casasbahia", "Casas Bahia"),
];

/// Turn a store domain such as `www.kabum.com.br` into a display label.
///
/// The first domain label (after an optional lowercase `www.`) is looked up
/// case-insensitively in the brand table; unknown stores get the label with
/// its first letter capitalized.
#[must_use]
pub fn format_store_name(domain: &str) -> String {
    let host = domain.strip_prefix("www.").unwrap_or(domain);
    let label = host.split('.').next().unwrap_or_default();
    let lowered = label.to_lowercase();

    if let Some((_, brand)) = KNOWN_STORES.iter().find(|(key, _)| *key == lowered) {
        return (*brand).to_owned();
    }
    capitalize_first(label)
}

fn capitalize_first(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
