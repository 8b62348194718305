//! Text cleanup and label normalization.
//!
//! Pure Rust implementations without external dependencies. Deeper
//! linguistic normalization (lemmatization) stays with the external
//! toolkit behind the extractor seam; this module only does the
//! character-level cleanup both sides agree on.

/// Clean raw text for extraction.
///
/// Replaces punctuation with spaces, keeps intra-word apostrophes
/// ("argentina's"), drops dangling ones, and collapses whitespace runs.
pub fn clean_text(text: &str) -> String {
    let mut kept = String::with_capacity(text.len());
    let chars: Vec<char> = text.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        if c.is_alphanumeric() || c.is_whitespace() {
            kept.push(c);
        } else if c == '\'' {
            let word_before = i > 0 && chars[i - 1].is_alphanumeric();
            let word_after = i + 1 < chars.len() && chars[i + 1].is_alphanumeric();
            if word_before && word_after {
                kept.push(c);
            } else {
                kept.push(' ');
            }
        } else {
            kept.push(' ');
        }
    }

    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a candidate concept label.
///
/// Cleans, lowercases, and trims the label. Returns `None` when the
/// result is empty or longer than three words, matching the concept
/// contract.
pub fn normalize_label(label: &str) -> Option<String> {
    let cleaned = clean_text(label).to_lowercase();
    if cleaned.is_empty() || cleaned.split_whitespace().count() > 3 {
        return None;
    }
    Some(cleaned)
}

/// Split text into sentence-like segments for statistical scoring.
///
/// Splits on sentence punctuation and newlines; empty segments are
/// dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?', '\n', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
