//! Text normalization shared by the scorer and the selector.
//!
//! Normalized text is lowercase, contains only letters, digits and single
//! spaces, and has no leading or trailing whitespace.

use std::collections::HashSet;
use std::sync::LazyLock;

const STOP_WORD_LIST: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "is", "are", "was", "were", "be", "been", "being", "in",
    "on", "at", "to", "for", "with", "about", "against", "between", "into", "through", "during",
    "before", "after", "above", "below", "from", "up", "down", "of", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "any", "both", "each",
];

static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORD_LIST.iter().copied().collect());

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Normalize with stop-word removal, the mode used by the blended scorer.
pub fn normalize(text: &str) -> String {
    normalize_with(text, true)
}

/// Lowercase, replace punctuation with spaces and collapse whitespace.
pub fn normalize_basic(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize `text`, optionally dropping stop words.
///
/// When every token is a stop word the basic normalized form is returned
/// instead of an empty string, so "the and" still compares as "the and".
pub fn normalize_with(text: &str, remove_stop_words: bool) -> String {
    let basic = normalize_basic(text);
    if !remove_stop_words || basic.is_empty() {
        return basic;
    }

    let kept: Vec<&str> = basic.split(' ').filter(|w| !is_stop_word(w)).collect();
    if kept.is_empty() {
        return basic;
    }

    kept.join(" ")
}
