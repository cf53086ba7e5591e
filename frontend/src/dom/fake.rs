use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::dom::{PageDocument, PageElement, Viewport};
use crate::error::{InteractionError, Result};

#[derive(Debug, Default)]
struct ElementState {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: HashMap<String, String>,
    style: HashMap<String, String>,
    style_writes: usize,
    scrolls: usize,
    unstyleable: bool,
}

/// In-memory element; clones share state like handles to a DOM node do.
#[derive(Debug, Clone)]
pub struct FakeElement(Rc<RefCell<ElementState>>);

impl FakeElement {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(ElementState {
            tag: tag.to_string(),
            ..Default::default()
        })))
    }

    pub fn with_id(self, id: &str) -> Self {
        self.0.borrow_mut().id = Some(id.to_string());
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.0.borrow_mut().classes.push(class.to_string());
        self
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Behaves like an element without inline style (a MathML node, say).
    pub fn unstyleable(self) -> Self {
        self.0.borrow_mut().unstyleable = true;
        self
    }

    pub fn style(&self, name: &str) -> Option<String> {
        self.0.borrow().style.get(name).cloned()
    }

    pub fn style_writes(&self) -> usize {
        self.0.borrow().style_writes
    }

    pub fn class_count(&self, class: &str) -> usize {
        self.0.borrow().classes.iter().filter(|c| *c == class).count()
    }

    pub fn scrolls(&self) -> usize {
        self.0.borrow().scrolls
    }

    fn matches(&self, selector: &str) -> bool {
        let state = self.0.borrow();
        if let Some(class) = selector.strip_prefix('.') {
            return state.classes.iter().any(|c| c == class);
        }
        if let Some(id) = selector.strip_prefix('#') {
            return state.id.as_deref() == Some(id);
        }
        if let Some((tag, rest)) = selector.split_once('[') {
            if let Some((name, prefix)) = rest.trim_end_matches(']').split_once("^=") {
                let prefix = prefix.trim_matches('"');
                return state.tag == tag
                    && state
                        .attributes
                        .get(name)
                        .map_or(false, |value| value.starts_with(prefix));
            }
        }
        state.tag == selector
    }
}

impl PageElement for FakeElement {
    fn set_style_property(&self, name: &str, value: &str) -> Result<()> {
        let mut state = self.0.borrow_mut();
        if state.unstyleable {
            return Err(InteractionError::Unstyleable(state.tag.clone()));
        }
        state.style.insert(name.to_string(), value.to_string());
        state.style_writes += 1;
        Ok(())
    }

    fn add_class(&self, class: &str) -> Result<()> {
        let mut state = self.0.borrow_mut();
        if !state.classes.iter().any(|c| c == class) {
            state.classes.push(class.to_string());
        }
        Ok(())
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn scroll_into_view_smooth(&self) {
        self.0.borrow_mut().scrolls += 1;
    }
}

#[derive(Debug, Clone)]
pub struct FakeDocument {
    elements: Vec<FakeElement>,
    viewport: Viewport,
}

impl FakeDocument {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            viewport: Viewport { width, height },
        }
    }

    pub fn push(&mut self, element: FakeElement) -> FakeElement {
        self.elements.push(element.clone());
        element
    }
}

impl PageDocument for FakeDocument {
    type Element = FakeElement;

    fn query(&self, selector: &str) -> Result<Option<FakeElement>> {
        Ok(self.elements.iter().find(|e| e.matches(selector)).cloned())
    }

    fn query_all(&self, selector: &str) -> Result<Vec<FakeElement>> {
        Ok(self
            .elements
            .iter()
            .filter(|e| e.matches(selector))
            .cloned()
            .collect())
    }

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.elements
            .iter()
            .find(|e| e.0.borrow().id.as_deref() == Some(id))
            .cloned()
    }

    fn viewport(&self) -> Result<Viewport> {
        Ok(self.viewport)
    }
}
