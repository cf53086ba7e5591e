use crate::dom::{PageDocument, PageElement, Viewport};
use crate::error::{InteractionError, Result};

/// Rotation derived from one pointer position, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltAngles {
    pub x: f64,
    pub y: f64,
}

impl TiltAngles {
    pub fn from_pointer(viewport: Viewport, page_x: f64, page_y: f64, divisor: f64) -> Self {
        let (center_x, center_y) = viewport.center();
        Self {
            x: (center_x - page_x) / divisor,
            y: (center_y - page_y) / divisor,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "rotateY({}deg) rotateX({}deg)",
            css_number(self.x),
            css_number(self.y)
        )
    }
}

// f64 Display already prints the shortest round-trip form; only -0 differs from CSS output.
fn css_number(value: f64) -> f64 {
    value + 0.0
}

/// Tilts the hero phone toward the pointer.
pub struct TiltResponder<D: PageDocument> {
    document: D,
    target: String,
    divisor: f64,
}

impl<D: PageDocument> TiltResponder<D> {
    pub fn new(document: D, target: impl Into<String>, divisor: f64) -> Self {
        Self {
            document,
            target: target.into(),
            divisor,
        }
    }

    /// Recomputes and overwrites the transform; nothing carries over between moves.
    pub fn on_pointer_move(&self, page_x: f64, page_y: f64) -> Result<TiltAngles> {
        let target = self
            .document
            .query(&self.target)?
            .ok_or_else(|| InteractionError::MissingElement(self.target.clone()))?;

        let viewport = self.document.viewport()?;
        let angles = TiltAngles::from_pointer(viewport, page_x, page_y, self.divisor);
        target.set_style_property("transform", &angles.transform())?;
        Ok(angles)
    }
}
