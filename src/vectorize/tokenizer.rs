// Bag-of-words tokenizer shared by every document in a vectorize call.
//
// Text is lowercased, then split into maximal runs of word characters
// (Unicode alphanumerics plus underscore). Everything else is a delimiter.
// Tokens shorter than `min_token_len` characters are dropped, and an optional
// English stop word list removes filler terms.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// Tokens of fewer characters than this are dropped by default.
pub const DEFAULT_MIN_TOKEN_LEN: usize = 2;

/// Tokenization policy. One instance is applied to the whole corpus so every
/// document is split the same way.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    /// Minimum token length in characters (not bytes)
    pub min_token_len: usize,
    /// Terms removed after lowercasing; empty means keep everything
    pub stop_words: HashSet<String>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            stop_words: HashSet::new(),
        }
    }
}

impl TokenizerConfig {
    /// Default policy plus the English stop word list from the `stop-words` crate.
    pub fn with_english_stop_words() -> Self {
        let stop_words: Vec<String> = get(LANGUAGE::English);
        Self {
            stop_words: stop_words.into_iter().collect(),
            ..Self::default()
        }
    }

    fn keeps(&self, token: &str) -> bool {
        token.chars().count() >= self.min_token_len && !self.stop_words.contains(token)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split `text` into retained, lowercased terms in order of appearance.
///
/// Duplicates are kept; term frequency is counted by the caller.
pub fn tokenize(text: &str, config: &TokenizerConfig) -> Vec<String> {
    let lower = text.to_lowercase();

    lower
        .split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty() && config.keeps(token))
        .map(str::to_string)
        .collect()
}
