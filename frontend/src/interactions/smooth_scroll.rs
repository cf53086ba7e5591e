use crate::dom::{PageDocument, PageElement};
use crate::error::{InteractionError, Result};

/// The id an in-page link points at, or `None` for links that leave the page.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

pub struct SmoothScrollRouter<D: PageDocument> {
    document: D,
}

impl<D: PageDocument> SmoothScrollRouter<D> {
    pub fn new(document: D) -> Self {
        Self { document }
    }

    /// Scrolls to the anchor's destination. The caller has already
    /// suppressed the default jump, even when this fails.
    pub fn on_click(&self, href: &str) -> Result<D::Element> {
        let id = fragment_id(href)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| InteractionError::MissingScrollTarget(href.to_string()))?;

        let target = self
            .document
            .element_by_id(id)
            .ok_or_else(|| InteractionError::MissingScrollTarget(id.to_string()))?;

        target.scroll_into_view_smooth();
        Ok(target)
    }
}
