//! Crate error type.
//!
//! ERROR HANDLING
//! ==============
//! Only failures that stop an operation from completing are errors: the
//! request never got a usable answer, the DOM refused a mutation, or a build
//! setting is malformed. A backend that answers with a failure status is not
//! an error here; that outcome travels as data in [`crate::net::types::HttpReply`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// The request never completed (network down, CORS, aborted).
    #[error("transport error: {0}")]
    Transport(String),
    /// A response arrived but its body was not the expected JSON.
    #[error("decode error: {0}")]
    Decode(String),
    /// A DOM call failed or an expected element is missing.
    #[error("dom error: {0}")]
    Dom(String),
    #[error("invalid config {key}: {reason}")]
    Config { key: &'static str, reason: String },
}

impl WidgetError {
    /// Whether the backend should be treated as unreachable.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Decode(_))
    }
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for WidgetError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(js_error_message(&value))
    }
}

#[cfg(feature = "browser")]
impl From<gloo_net::Error> for WidgetError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Transport(other.to_string()),
        }
    }
}

/// Best-effort message extraction from a thrown JS value.
#[cfg(feature = "browser")]
pub(crate) fn js_error_message(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}
