//! Shared text processing.
//!
//! Both scorer backends tokenize identically; a model artifact scores the
//! same token stream its vectorizer was trained on.

use regex::Regex;
use std::sync::OnceLock;

static WORD_PATTERN: OnceLock<Regex> = OnceLock::new();

fn word_pattern() -> &'static Regex {
    WORD_PATTERN.get_or_init(|| {
        // Words with an optional internal apostrophe ("won't", "market's").
        Regex::new(r"[a-z0-9]+(?:'[a-z]+)?").expect("static tokenizer pattern must compile")
    })
}

/// Split text into lowercase word tokens.
///
/// Punctuation and symbols are dropped; token order is preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
