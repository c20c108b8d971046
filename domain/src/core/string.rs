//! String helpers for rendering reasoning into summaries and reasons.

/// Truncate to at most `max_len` bytes, ending with "..." when cut.
///
/// Never splits a UTF-8 character.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len.saturating_sub(3).min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

/// Collapse all runs of whitespace (including newlines) into single spaces
pub fn one_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// [`one_line`] followed by [`truncate`]
pub fn excerpt(s: &str, max_len: usize) -> String {
    truncate(&one_line(s), max_len)
}
