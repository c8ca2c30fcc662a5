//! String formatting utilities for UI rendering.

use photoarchive_core::Photo;

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Format a size in megabytes with the two decimals the archive stores.
pub fn format_size_mb(size_mb: f64, pretty: bool) -> String {
    if pretty {
        format!("{:.2} MB", size_mb)
    } else {
        format!("{:.2}", size_mb)
    }
}

/// Format dimensions as `WIDTHxHEIGHT`.
pub fn format_dimensions(photo: &Photo) -> String {
    format!("{}x{}", photo.width, photo.height)
}

/// Show an empty text field as a dash.
pub fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}
