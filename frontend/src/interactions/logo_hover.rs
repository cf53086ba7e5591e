use crate::dom::PageElement;
use crate::error::Result;

pub const HOVER_TRANSFORM: &str = "scale(1.1) rotate(10deg)";
pub const REST_TRANSFORM: &str = "scale(1) rotate(0deg)";

/// Logos pop and twist under the pointer. Easing is left to the stylesheet.
pub struct LogoHover;

impl LogoHover {
    pub fn on_enter<E: PageElement>(&self, logo: &E) -> Result<()> {
        logo.set_style_property("transform", HOVER_TRANSFORM)
    }

    pub fn on_leave<E: PageElement>(&self, logo: &E) -> Result<()> {
        logo.set_style_property("transform", REST_TRANSFORM)
    }
}
