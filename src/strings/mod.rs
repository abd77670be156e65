//! String helpers.

/// Truncates `input` to at most `max_chars` Unicode scalar values.
///
/// The cut always falls on a character boundary. When `input` is already
/// short enough it is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use utilkit::strings::truncate;
///
/// assert_eq!(truncate("hello world", 5), "hello");
/// assert_eq!(truncate("привет", 3), "при");
/// assert_eq!(truncate("short", 10), "short");
/// ```
pub fn truncate(input: &str, max_chars: usize) -> &str {
    match input.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &input[..byte_index],
        None => input,
    }
}
