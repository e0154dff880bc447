// src/assessment.rs
//! Tone bands derived from the raw lexicon score.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Overall tone of a piece of content. Closed set; the wire labels are part
/// of the API contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Assessment {
    #[serde(rename = "very positive")]
    VeryPositive,
    #[serde(rename = "positive")]
    Positive,
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "negative")]
    Negative,
    #[serde(rename = "very negative")]
    VeryNegative,
}

impl Assessment {
    /// Classify a raw score. First match wins; -3 and 3 belong to the inner
    /// bands.
    pub fn from_score(score: i32) -> Self {
        if score > 3 {
            Assessment::VeryPositive
        } else if score > 0 {
            Assessment::Positive
        } else if score < -3 {
            Assessment::VeryNegative
        } else if score < 0 {
            Assessment::Negative
        } else {
            Assessment::Neutral
        }
    }

    /// Wire label, identical to the serde representation.
    pub fn label(self) -> &'static str {
        match self {
            Assessment::VeryPositive => "very positive",
            Assessment::Positive => "positive",
            Assessment::Neutral => "neutral",
            Assessment::Negative => "negative",
            Assessment::VeryNegative => "very negative",
        }
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
