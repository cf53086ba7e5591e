use crate::dom::PageElement;
use crate::error::Result;

/// One intersection report for an observed element.
pub struct RevealEntry<E> {
    pub target: E,
    pub is_intersecting: bool,
}

/// One-way reveal: the class is added on first sight and never taken away.
pub struct RevealObserver {
    class: String,
    threshold: f64,
}

impl RevealObserver {
    pub fn new(class: impl Into<String>, threshold: f64) -> Self {
        Self {
            class: class.into(),
            threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns how many entries in the batch were intersecting.
    pub fn on_entries<E, I>(&self, entries: I) -> Result<usize>
    where
        E: PageElement,
        I: IntoIterator<Item = RevealEntry<E>>,
    {
        let mut revealed = 0;
        for entry in entries {
            if entry.is_intersecting {
                entry.target.add_class(&self.class)?;
                revealed += 1;
            }
        }
        Ok(revealed)
    }
}
