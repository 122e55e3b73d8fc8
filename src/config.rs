use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::pipeline::limits::{Limits, DEFAULT_MAX_CANDIDATES, DEFAULT_MAX_DOCUMENT_BYTES};
use crate::vectorize::tokenizer::DEFAULT_MIN_TOKEN_LEN;
use crate::vectorize::{TfIdfVectorizer, TokenizerConfig};

/// Which stop word list the tokenizer applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopWords {
    /// Keep every term (default)
    None,
    English,
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. CLI flags override
/// whatever is set here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Most candidates accepted in one ranking (RESUMERANK_MAX_CANDIDATES)
    pub max_candidates: usize,
    /// Largest document accepted, in bytes (RESUMERANK_MAX_DOCUMENT_BYTES)
    pub max_document_bytes: usize,
    /// Shortest token kept, in characters (RESUMERANK_MIN_TOKEN_LEN)
    pub min_token_len: usize,
    /// RESUMERANK_STOP_WORDS: "english" or "none"
    pub stop_words: StopWords,
    /// Use 1 + ln(tf) instead of raw counts (RESUMERANK_SUBLINEAR_TF)
    pub sublinear_tf: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_candidates: DEFAULT_MAX_CANDIDATES,
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            stop_words: StopWords::None,
            sublinear_tf: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables. Unset variables take
    /// their defaults; set but malformed ones are an error.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let min_token_len = parse_var(
            "RESUMERANK_MIN_TOKEN_LEN",
            lookup("RESUMERANK_MIN_TOKEN_LEN"),
            defaults.min_token_len,
        )?;
        if min_token_len == 0 {
            anyhow::bail!("RESUMERANK_MIN_TOKEN_LEN must be at least 1");
        }

        let stop_words = match lookup("RESUMERANK_STOP_WORDS")
            .map(|v| v.trim().to_lowercase())
            .as_deref()
        {
            None | Some("") | Some("none") => StopWords::None,
            Some("english") => StopWords::English,
            Some(other) => anyhow::bail!(
                "RESUMERANK_STOP_WORDS must be \"english\" or \"none\", got \"{other}\""
            ),
        };

        Ok(Self {
            max_candidates: parse_var(
                "RESUMERANK_MAX_CANDIDATES",
                lookup("RESUMERANK_MAX_CANDIDATES"),
                defaults.max_candidates,
            )?,
            max_document_bytes: parse_var(
                "RESUMERANK_MAX_DOCUMENT_BYTES",
                lookup("RESUMERANK_MAX_DOCUMENT_BYTES"),
                defaults.max_document_bytes,
            )?,
            min_token_len,
            stop_words,
            sublinear_tf: parse_flag("RESUMERANK_SUBLINEAR_TF", lookup("RESUMERANK_SUBLINEAR_TF"))?,
        })
    }

    pub fn limits(&self) -> Limits {
        Limits {
            max_candidates: self.max_candidates,
            max_document_bytes: self.max_document_bytes,
        }
    }

    /// The TF-IDF vectorizer this configuration describes.
    pub fn vectorizer(&self) -> TfIdfVectorizer {
        let mut tokenizer = match self.stop_words {
            StopWords::English => TokenizerConfig::with_english_stop_words(),
            StopWords::None => TokenizerConfig::default(),
        };
        tokenizer.min_token_len = self.min_token_len;

        TfIdfVectorizer {
            tokenizer,
            sublinear_tf: self.sublinear_tf,
        }
    }
}

fn parse_var<T>(name: &str, value: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(v) if !v.trim().is_empty() => v
            .trim()
            .parse()
            .with_context(|| format!("{name} is not a valid number: \"{v}\"")),
        _ => Ok(default),
    }
}

fn parse_flag(name: &str, value: Option<String>) -> Result<bool> {
    match value.map(|v| v.trim().to_lowercase()).as_deref() {
        None | Some("") | Some("0") | Some("false") | Some("no") | Some("off") => Ok(false),
        Some("1") | Some("true") | Some("yes") | Some("on") => Ok(true),
        Some(other) => anyhow::bail!("{name} must be true or false, got \"{other}\""),
    }
}
