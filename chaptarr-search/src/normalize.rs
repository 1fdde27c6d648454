//! Text canonicalization for matching and comparison.
//!
//! Every title/author comparison in the pipeline goes through [`normalize`]
//! first, so "The Hobbit!" and "the   hobbit" compare equal.

/// Words ignored when comparing stripped titles.
pub const STOP_WORDS: [&str; 13] = [
    "a", "an", "the", "and", "or", "of", "in", "to", "for", "on", "at", "by", "is",
];

/// Canonicalizes free-form text for comparison.
///
/// Lowercases, replaces every run of non-alphanumeric characters with a
/// single space, and trims. Pure and total: empty input yields empty output.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_space = true;
        }
    }

    out
}

/// Removes the fixed stop-word set from already-normalized text.
pub fn strip_stop_words(text: &str) -> String {
    text.split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .collect::<Vec<&str>>()
        .join(" ")
}
