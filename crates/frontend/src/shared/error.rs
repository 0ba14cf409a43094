//! Client-side transport errors
//!
//! Application-level failures (`success: false`) are not errors here: they
//! decode fine and are handled as outcomes.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("no window")]
    NoWindow,
    #[error("failed to build request: {0}")]
    Request(String),
    #[error("fetch failed: {0}")]
    Network(String),
    #[error("failed to read response body: {0}")]
    Body(String),
    #[error("response is not valid JSON: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn request(e: JsValue) -> Self {
        Self::Request(js_error_text(&e))
    }

    pub fn network(e: JsValue) -> Self {
        Self::Network(js_error_text(&e))
    }

    pub fn body(e: JsValue) -> Self {
        Self::Body(js_error_text(&e))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

/// Best human-readable text for a thrown JS value.
fn js_error_text(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
