//! Self-introduction parsing ("my name is X").

use regex::Regex;
use std::sync::LazyLock;

/// `my name is` on a word boundary, followed directly by one word.
static NAME_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\bmy name is (\w+)").ok());

/// Extract a self-introduced name from raw user text.
///
/// Looks case-insensitively for `my name is ` starting on a word boundary and
/// followed directly by a word. Returns that word with its first character
/// upper-cased; the rest keeps its original case.
pub fn extract_name(text: &str) -> Option<String> {
    let captures = NAME_RE.as_ref()?.captures(text)?;
    captures.get(1).map(|m| capitalize_first(m.as_str()))
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => {
            let mut result = c.to_uppercase().to_string();
            result.push_str(chars.as_str());
            result
        }
        None => String::new(),
    }
}
