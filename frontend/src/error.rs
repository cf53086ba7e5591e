use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum InteractionError {
    #[error("no element matches `{0}`")]
    MissingElement(String),

    #[error("no element with id `{0}` to scroll to")]
    MissingScrollTarget(String),

    #[error("browser window is unavailable")]
    NoWindow,

    #[error("document is unavailable")]
    NoDocument,

    #[error("viewport size is unavailable")]
    ViewportUnavailable,

    #[error("element <{0}> has no inline style")]
    Unstyleable(String),

    #[error("{operation} failed: {message}")]
    Js {
        operation: &'static str,
        message: String,
    },

    #[error("invalid page configuration: {0}")]
    Config(String),
}

impl InteractionError {
    /// Wraps an exception thrown by a browser API.
    pub fn js(operation: &'static str, value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        InteractionError::Js { operation, message }
    }
}

impl From<serde_json::Error> for InteractionError {
    fn from(err: serde_json::Error) -> Self {
        InteractionError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, InteractionError>;
