//! Product card view builder.

use catalog::Product;

use super::{ANIMATION_STEP_MS, CardView, FALLBACK_IMAGE, ImageView, LinkView};
use crate::config::{CardTemplate, ClientConfig};
use crate::util::store_name::format_store_name;
use crate::util::text::truncate_text;

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

/// Build the card for the product at `index` in source order.
#[must_use]
pub fn build_card(product: &Product, index: usize, config: &ClientConfig) -> CardView {
    let store_label = format_store_name(&product.store);
    let aria_label = match config.card_template {
        CardTemplate::Rich => format!("View product at {store_label}"),
        CardTemplate::Compact => format!("View {}", product.title),
    };

    CardView {
        title_short: truncate_text(&product.title, config.title_max),
        title_full: product.title.clone(),
        price: product.price.clone(),
        image: ImageView {
            src: product.image.clone(),
            fallback: FALLBACK_IMAGE,
            lazy: true,
        },
        link: LinkView {
            href: product.url.clone(),
            target: "_blank",
            rel: "noopener noreferrer",
            aria_label,
        },
        animation_delay_ms: u64::try_from(index).map_or(u64::MAX, |i| i.saturating_mul(ANIMATION_STEP_MS)),
        store_label,
    }
}
