// src/util/text.rs
use chrono::DateTime;

/// Take the first `max_chars` characters of `text`, appending `...` when the
/// text was longer.
///
/// Counts Unicode scalar values, so multi-byte characters are never split.
///
/// # Examples
///
/// ```
/// use mdnotes::util::text::snippet;
///
/// assert_eq!(snippet("buy milk", 40), "buy milk");
/// assert_eq!(snippet("abcdef", 3), "abc...");
/// ```
pub fn snippet(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Collapse line breaks and runs of whitespace into single spaces, for
/// one-line list rows.
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Epoch milliseconds as `YYYY-MM-DD HH:MM UTC`; out-of-range values are
/// printed as the raw number.
pub fn format_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| millis.to_string())
}
