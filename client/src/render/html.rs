//! Paints a [`PageView`] as a standalone HTML document.
//!
//! DESIGN
//! ======
//! Templates are compiled into the binary and registered once per painter.
//! Handlebars HTML-escapes every `{{value}}` interpolation, so product strings
//! from `data.json` can never inject markup or break out of an attribute.

use handlebars::Handlebars;
use serde::Serialize;

use crate::config::CardTemplate;
use crate::util::shortcuts::{SHORTCUTS, ShortcutRow};
use crate::view::{CardView, Counters, Listing, NoticeView, PageView, ToggleView};

#[cfg(test)]
#[path = "html_test.rs"]
mod html_test;

const PAGE_TEMPLATE: &str = include_str!("../../templates/page.hbs");
const CARD_RICH_TEMPLATE: &str = include_str!("../../templates/card_rich.hbs");
const CARD_COMPACT_TEMPLATE: &str = include_str!("../../templates/card_compact.hbs");

/// Failure compiling or rendering a page template.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template `{name}` failed to compile: {source}")]
    Template {
        name: &'static str,
        #[source]
        source: Box<handlebars::TemplateError>,
    },
    #[error("page render failed: {0}")]
    Render(#[from] handlebars::RenderError),
}

#[derive(Serialize)]
struct PageContext<'a> {
    title: &'a str,
    toggle: &'a ToggleView,
    counters: &'a Counters,
    loading: bool,
    empty: bool,
    notice: Option<&'a NoticeView>,
    cards: &'a [CardView],
    compact: bool,
    fade_class: Option<&'static str>,
    shortcuts: &'static [ShortcutRow],
}

impl<'a> PageContext<'a> {
    fn new(page: &'a PageView) -> Self {
        let notice = match &page.listing {
            Listing::Error(notice) => Some(notice),
            _ => None,
        };
        Self {
            title: &page.title,
            toggle: &page.toggle,
            counters: &page.counters,
            loading: matches!(page.listing, Listing::Loading),
            empty: matches!(page.listing, Listing::Empty),
            notice,
            cards: page.listing.cards(),
            compact: page.card_template == CardTemplate::Compact,
            fade_class: fade_class(page.transition_seq),
            shortcuts: SHORTCUTS,
        }
    }
}

/// Alternating class names so each toggle restarts the CSS fade.
fn fade_class(transition_seq: u64) -> Option<&'static str> {
    match transition_seq {
        0 => None,
        n if n % 2 == 1 => Some("fade-a"),
        _ => Some("fade-b"),
    }
}

pub struct HtmlPainter {
    registry: Handlebars<'static>,
}

impl HtmlPainter {
    /// Compile the page and card templates.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] if a built-in template fails to
    /// compile.
    pub fn new() -> Result<Self, RenderError> {
        let mut registry = Handlebars::new();
        for (name, body) in [
            ("page", PAGE_TEMPLATE),
            ("card_rich", CARD_RICH_TEMPLATE),
            ("card_compact", CARD_COMPACT_TEMPLATE),
        ] {
            registry
                .register_template_string(name, body)
                .map_err(|e| RenderError::Template { name, source: Box::new(e) })?;
        }
        Ok(Self { registry })
    }

    /// Render `page` to a complete HTML document.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Render`] if template evaluation fails.
    pub fn paint(&self, page: &PageView) -> Result<String, RenderError> {
        Ok(self.registry.render("page", &PageContext::new(page))?)
    }
}
