use log::Level;
use serde::Deserialize;

use crate::error::{InteractionError, Result};

/// Id of the optional inline JSON block that overrides [`PageConfig`].
pub const CONFIG_ELEMENT_ID: &str = "page-interactions-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Local builds via `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Selectors and constants the page behaviors are bound to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub tilt_target: String,
    pub tilt_divisor: f64,
    pub anchor_selector: String,
    pub feature_selector: String,
    pub reveal_class: String,
    pub reveal_threshold: f64,
    pub logo_selector: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            tilt_target: ".phone".to_string(),
            tilt_divisor: 50.0,
            anchor_selector: "a[href^=\"#\"]".to_string(),
            feature_selector: ".feature".to_string(),
            reveal_class: "visible".to_string(),
            reveal_threshold: 0.1,
            logo_selector: ".logo".to_string(),
        }
    }
}

impl PageConfig {
    /// Parses an override block. Fields left out keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: PageConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(self.tilt_divisor.is_finite() && self.tilt_divisor > 0.0) {
            return Err(InteractionError::Config(format!(
                "tilt_divisor must be a positive number, got {}",
                self.tilt_divisor
            )));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(InteractionError::Config(format!(
                "reveal_threshold must be within [0, 1], got {}",
                self.reveal_threshold
            )));
        }
        Ok(())
    }

    /// Falls back to the defaults when the override is absent or broken.
    pub fn from_override(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => PageConfig::from_json(raw).unwrap_or_else(|err| {
                log::error!("{}, using defaults", err);
                PageConfig::default()
            }),
            None => PageConfig::default(),
        }
    }
}
