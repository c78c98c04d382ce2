//! Tokenizing and text helpers.

/// Split raw text into display tokens.
///
/// Whitespace runs of any kind (spaces, tabs, newlines, Unicode spaces)
/// separate tokens; leading/trailing whitespace is dropped and no token is
/// ever empty.
///
/// # Returns
/// The token sequence; empty when `raw` is empty or whitespace-only.
pub fn tokenize(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

/// Return the prefix of `text` holding at most `max_chars` characters.
///
/// Always cuts on a character boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
