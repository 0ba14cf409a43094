//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use crate::shared::config::PageConfig;
use crate::shared::error::ApiError;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, Response};

/// Get the base URL for API requests
///
/// The backend serves the page itself, so requests go to the page origin
/// unless the build overrides it (see [`PageConfig::api_base`]).
///
/// # Returns
/// - API base URL like "http://localhost:5000"
/// - Empty string if window is not available (relative URLs)
pub fn api_base() -> String {
    if let Some(base) = PageConfig::default().api_base {
        return base;
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/upload");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Send a request and decode its JSON body.
///
/// The body is decoded whatever the HTTP status: the backend reports
/// application errors as `400` with a JSON `{ "error": ... }` body.
pub async fn fetch_json<T: DeserializeOwned>(request: &Request) -> Result<T, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;
    let resp_value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(ApiError::network)?;
    let resp: Response = resp_value.dyn_into().map_err(ApiError::network)?;

    if !resp.ok() {
        log::debug!("HTTP {} from {}", resp.status(), resp.url());
    }

    let text = JsFuture::from(resp.text().map_err(ApiError::body)?)
        .await
        .map_err(ApiError::body)?;
    let text = text
        .as_string()
        .ok_or_else(|| ApiError::Body("bad text".to_string()))?;
    Ok(serde_json::from_str(&text)?)
}
