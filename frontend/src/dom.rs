//! The slice of the document the page behaviors touch.
//!
//! Behaviors are written against [`PageDocument`] and [`PageElement`] so they
//! run the same over the live DOM ([`web::WebDocument`]) and over the
//! in-memory document used by the unit tests.

use crate::error::Result;

pub mod web;

#[cfg(test)]
pub(crate) mod fake;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

pub trait PageElement {
    /// Overwrites one inline style property.
    fn set_style_property(&self, name: &str, value: &str) -> Result<()>;

    /// Adds a class; adding one that is already present changes nothing.
    fn add_class(&self, class: &str) -> Result<()>;

    fn attribute(&self, name: &str) -> Option<String>;

    /// Asks the browser for an animated scroll bringing this element into view.
    fn scroll_into_view_smooth(&self);
}

pub trait PageDocument {
    type Element: PageElement;

    fn query(&self, selector: &str) -> Result<Option<Self::Element>>;

    fn query_all(&self, selector: &str) -> Result<Vec<Self::Element>>;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn viewport(&self) -> Result<Viewport>;
}
