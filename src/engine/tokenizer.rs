//! Shared tokenizer for index building and queries.

use crate::config::TRAILING_PUNCTUATION;

/// Whitespace tokenizer with case folding and trailing-punctuation stripping.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    trailing: &'static [char],
}

impl Tokenizer {
    /// Create a tokenizer stripping the default punctuation set.
    pub fn new() -> Self {
        Self {
            trailing: TRAILING_PUNCTUATION,
        }
    }

    /// Use a different set of strippable trailing characters.
    pub fn with_trailing_punctuation(trailing: &'static [char]) -> Self {
        Self { trailing }
    }

    /// Split text on whitespace without normalizing.
    ///
    /// Every raw token counts toward a document's length, including those
    /// that later normalize to nothing.
    pub fn raw_tokens<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> {
        text.split_whitespace()
    }

    /// Normalize a single token into an index key.
    ///
    /// Lower-cases the token and strips at most one trailing punctuation
    /// character, so `"end.."` becomes `"end."`. Returns `None` when nothing
    /// is left.
    pub fn normalize(&self, token: &str) -> Option<String> {
        let mut word = token.to_lowercase();
        if word.ends_with(self.trailing) {
            word.pop();
        }
        if word.is_empty() {
            None
        } else {
            Some(word)
        }
    }

    /// Tokenize and normalize, dropping tokens that normalize to nothing.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.raw_tokens(text)
            .filter_map(|token| self.normalize(token))
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
