//! Small string helpers shared by the enricher and the judge.

/// Truncates `s` to at most `max_chars` Unicode scalar values.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Replaces CR/LF with spaces.
pub fn flatten_newlines(s: &str) -> String {
    s.replace(['\r', '\n'], " ")
}
