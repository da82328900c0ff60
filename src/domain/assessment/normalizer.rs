//! Text normalization for trigger matching.
//!
//! Notes and vocabulary terms go through the same pipeline so comparisons
//! are symmetric: lowercase, canonical decomposition (NFD), then every
//! combining mark is dropped. "CHOLESTÉROL", "Cholestérol" and
//! "cholesterol" all normalize to `cholesterol`.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercases `text` and strips its diacritics.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Normalizes `text` and splits it into words.
///
/// Runs of characters that are neither alphanumeric nor `_` separate
/// tokens; empty tokens are never produced.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
