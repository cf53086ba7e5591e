use wasm_bindgen::JsCast;
use web_sys::{
    CssStyleDeclaration, Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions,
    SvgElement, Window,
};

use crate::config::CONFIG_ELEMENT_ID;
use crate::dom::{PageDocument, PageElement, Viewport};
use crate::error::{InteractionError, Result};

/// The live browser document.
#[derive(Clone)]
pub struct WebDocument {
    window: Window,
    document: Document,
}

impl WebDocument {
    pub fn from_window() -> Result<Self> {
        let window = web_sys::window().ok_or(InteractionError::NoWindow)?;
        let document = window.document().ok_or(InteractionError::NoDocument)?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Text of the inline JSON config block, if the page ships one.
    pub fn inline_config(&self) -> Option<String> {
        self.document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
    }
}

#[derive(Clone)]
pub struct WebElement(Element);

impl WebElement {
    pub fn new(element: Element) -> Self {
        Self(element)
    }

    pub fn as_element(&self) -> &Element {
        &self.0
    }

    fn style(&self) -> Result<CssStyleDeclaration> {
        if let Some(html) = self.0.dyn_ref::<HtmlElement>() {
            return Ok(html.style());
        }
        if let Some(svg) = self.0.dyn_ref::<SvgElement>() {
            return Ok(svg.style());
        }
        Err(InteractionError::Unstyleable(self.0.tag_name()))
    }
}

impl PageElement for WebElement {
    fn set_style_property(&self, name: &str, value: &str) -> Result<()> {
        self.style()?
            .set_property(name, value)
            .map_err(|err| InteractionError::js("style.setProperty", err))
    }

    fn add_class(&self, class: &str) -> Result<()> {
        self.0
            .class_list()
            .add_1(class)
            .map_err(|err| InteractionError::js("classList.add", err))
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn scroll_into_view_smooth(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        self.0.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

impl PageDocument for WebDocument {
    type Element = WebElement;

    fn query(&self, selector: &str) -> Result<Option<WebElement>> {
        self.document
            .query_selector(selector)
            .map(|found| found.map(WebElement))
            .map_err(|err| InteractionError::js("querySelector", err))
    }

    fn query_all(&self, selector: &str) -> Result<Vec<WebElement>> {
        let nodes = self
            .document
            .query_selector_all(selector)
            .map_err(|err| InteractionError::js("querySelectorAll", err))?;

        Ok((0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(WebElement)
            .collect())
    }

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement)
    }

    fn viewport(&self) -> Result<Viewport> {
        let width = self
            .window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .ok_or(InteractionError::ViewportUnavailable)?;
        let height = self
            .window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .ok_or(InteractionError::ViewportUnavailable)?;
        Ok(Viewport { width, height })
    }
}
