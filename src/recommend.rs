// src/recommend.rs
//! Writing recommendations derived from the tone band. The five bands
//! collapse into three polarity groups with fixed copy.

use serde::{Deserialize, Serialize};

use crate::assessment::Assessment;
use crate::sentiment::SentimentAnalyzer;

/// Tone summary plus concrete suggestions, returned alongside the analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub tone: String,
    pub suggestions: Vec<String>,
}

impl Recommendations {
    /// Total mapping over the five tone bands.
    pub fn for_assessment(assessment: Assessment) -> Self {
        match assessment {
            Assessment::VeryNegative | Assessment::Negative => Self {
                tone: "Your content has a negative tone.".to_string(),
                suggestions: vec![
                    "Consider balancing criticism with constructive suggestions.".to_string(),
                    "Try incorporating some positive aspects to provide balance.".to_string(),
                    "Check if emotional language might be excessive.".to_string(),
                ],
            },
            Assessment::Neutral => Self {
                tone: "Your content has a neutral tone.".to_string(),
                suggestions: vec![
                    "Consider adding more engaging or descriptive language.".to_string(),
                    "Your balanced approach works well for informational content.".to_string(),
                ],
            },
            Assessment::Positive | Assessment::VeryPositive => Self {
                tone: "Your content has a positive tone.".to_string(),
                suggestions: vec![
                    "Ensure enthusiasm feels authentic and appropriate for the topic.".to_string(),
                    "Consider if critical evaluation might be useful in some areas.".to_string(),
                ],
            },
        }
    }

    /// Recommendations for raw content. Re-derives its own analysis; callers
    /// must not assume it shares work with a previous `analyze` call.
    pub fn for_content(analyzer: &SentimentAnalyzer, content: &str) -> Self {
        let report = analyzer.analyze(content);
        Self::for_assessment(Assessment::from_score(report.score))
    }
}
