//! Page configuration
//!
//! Values are fixed at build time. The API base can be pointed at another
//! origin with `PDF_QA_API_BASE=http://host:port trunk build`.

/// Upper bound for the auto-growing question box, in CSS pixels.
pub const TEXTAREA_MAX_HEIGHT: i32 = 150;

/// Delay before the chat section is scrolled into view after an upload.
pub const CHAT_SCROLL_DELAY_MS: u32 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// Prefix for both endpoints; empty means same origin.
    pub api_base: Option<String>,
    pub textarea_max_height: i32,
    pub chat_scroll_delay_ms: u32,
    /// Render retrieved context under bot answers. Off: the context is
    /// fetched and kept but not shown.
    pub show_context: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            api_base: option_env!("PDF_QA_API_BASE").map(|s| s.trim_end_matches('/').to_string()),
            textarea_max_height: TEXTAREA_MAX_HEIGHT,
            chat_scroll_delay_ms: CHAT_SCROLL_DELAY_MS,
            show_context: false,
        }
    }
}
