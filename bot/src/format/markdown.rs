//! # Markdown Escaping
//!
//! File: bot/src/format/markdown.rs
//! Author: Christi Mahu
//!
//! Free text coming from OMDb (titles, plots, cast lists) is spliced into
//! Markdown replies. Any markup character in that text is prefixed with a
//! backslash so that Telegram renders it literally.
//!
use crate::omdb::NOT_AVAILABLE;

/// Characters that carry meaning in Telegram markup.
pub const MARKUP_CHARS: [char; 18] = [
    '*', '_', '`', '[', ']', '(', ')', '~', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Backslash-escapes every markup character in `text`.
///
/// Empty input and the `"N/A"` marker are returned unchanged. The escape is a
/// single pass: each markup character gets exactly one backslash, and the
/// backslash itself is not treated as markup.
pub fn escape(text: &str) -> String {
    if text.is_empty() || text == NOT_AVAILABLE {
        return text.to_string();
    }
    let mut escaped = String::with_capacity(text.len() + text.len() / 4);
    for ch in text.chars() {
        if MARKUP_CHARS.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
