//! Question box ergonomics

/// Enter sends, Shift+Enter inserts a newline.
pub fn should_submit(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

/// Height for the auto-growing textarea: its content height, capped at `max`.
pub fn textarea_height(scroll_height: i32, max: i32) -> i32 {
    scroll_height.min(max)
}
