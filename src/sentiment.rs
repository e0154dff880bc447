// src/sentiment.rs
//! Lexicon-backed sentiment scoring: tokenizer, lexicon loading, and the
//! per-request report consumed by the tone classifier and the API layer.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::normalize::normalize_content;

// --- env names ---
pub const ENV_LEXICON_PATH: &str = "SENTIMENT_LEXICON_PATH";

/// AFINN-style word weights embedded at build time; the default table when no
/// override file is configured.
static EMBEDDED_LEXICON: Lazy<HashMap<String, i32>> = Lazy::new(|| {
    let raw = include_str!("../sentiment_lexicon.json");
    serde_json::from_str::<HashMap<String, i32>>(raw).expect("valid sentiment lexicon")
});

/// Basic, Unicode-friendly word tokenizer shared by scoring and tests.
static WORD_RE: Lazy<Regex> = Lazy::new(|| {
    // \w covers [A-Za-z0-9_]; (?u) enables Unicode
    Regex::new(r"(?u)\b\w+\b").expect("tokenizer regex")
});

/// Lowercased word tokens, in input order, duplicates retained.
pub fn tokenize(input: &str) -> Vec<String> {
    WORD_RE
        .find_iter(input)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Word→weight mapping. Loaded once at startup, immutable afterwards; shared
/// across requests without locking.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: HashMap<String, i32>,
}

impl Lexicon {
    /// The embedded AFINN-style table.
    pub fn embedded() -> Self {
        Self {
            words: EMBEDDED_LEXICON.clone(),
        }
    }

    /// Resolve from the environment: `SENTIMENT_LEXICON_PATH` points at a JSON
    /// object of word→weight; otherwise fall back to the embedded table.
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var(ENV_LEXICON_PATH) {
            Ok(path) => Self::from_file(path.as_ref()),
            Err(_) => Ok(Self::embedded()),
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read sentiment lexicon at {}: {}", path.display(), e)
        })?;
        let words: HashMap<String, i32> = serde_json::from_str(&raw)?;
        Ok(Self { words })
    }

    /// Lexicon weight for a normalized word (0 when absent).
    #[inline]
    pub fn weight(&self, word: &str) -> i32 {
        *self.words.get(word).unwrap_or(&0)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Result of scoring one piece of content. `positive`/`negative` list every
/// matched occurrence, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentReport {
    pub score: i32,
    pub comparative: f64,
    pub tokens: Vec<String>,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: Lexicon,
}

impl SentimentAnalyzer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Analyzer backed by the embedded lexicon.
    pub fn with_embedded_lexicon() -> Self {
        Self::new(Lexicon::embedded())
    }

    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }

    /// Score one piece of content. Pure function of the input and the fixed
    /// lexicon; always returns a report, even with zero lexicon matches.
    pub fn analyze(&self, content: &str) -> SentimentReport {
        let tokens = tokenize(&normalize_content(content));

        let mut score = 0i32;
        let mut positive = Vec::new();
        let mut negative = Vec::new();

        for tok in &tokens {
            let w = self.lexicon.weight(tok);
            if w > 0 {
                score += w;
                positive.push(tok.clone());
            } else if w < 0 {
                score += w;
                negative.push(tok.clone());
            }
        }

        // Guard the division: whitespace/punctuation-only content tokenizes to
        // nothing.
        let comparative = if tokens.is_empty() {
            0.0
        } else {
            f64::from(score) / tokens.len() as f64
        };

        SentimentReport {
            score,
            comparative,
            tokens,
            positive,
            negative,
        }
    }
}
