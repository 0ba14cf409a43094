//! HTML helpers
//!
//! Leptos renders strings as text nodes, so nothing on the page goes through
//! here today. Any code path that builds markup out of server or user text
//! (e.g. `inner_html`) must escape it first.

/// Escape text for safe inclusion in HTML content or a quoted attribute value
/// Example: `<b>"x" & 'y'</b>` -> `&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;`
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
