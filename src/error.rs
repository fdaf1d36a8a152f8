//! Transport Errors

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Failure talking to the objective endpoints.
/// Server-side validation failures are not errors; they arrive as a `ServerResult`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SaveError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("unreadable server response: {0}")]
    Malformed(String),
}

impl SaveError {
    /// Text for the banner shown inside the modal
    pub fn banner_text(&self) -> String {
        format!("Could not save the objective ({}). Please try again.", self)
    }
}

impl From<JsValue> for SaveError {
    fn from(value: JsValue) -> Self {
        let message = value
            .dyn_ref::<js_sys::Error>()
            .map(|err| String::from(err.message()))
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        SaveError::Network(message)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(err: serde_json::Error) -> Self {
        SaveError::Malformed(err.to_string())
    }
}
