//! Rubric evaluation — three pass/fail criteria and their aggregate score.

use serde::{Deserialize, Serialize};

use crate::analysis::config::AnalysisConfig;
use crate::analysis::sentiment::{SentimentLabel, SentimentResult};

/// The three named pass/fail criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricResult {
    /// Keyword list overlaps the question's expected-topic set.
    pub relevance: bool,
    /// Cleaned token count inside the configured band and disfluency ratio
    /// below the configured cutoff.
    pub clarity: bool,
    /// Sentiment is non-NEGATIVE at sufficient confidence.
    pub tone: bool,
}

impl RubricResult {
    /// Count of passing criteria, always in 0..=3.
    pub fn overall_score(&self) -> u8 {
        self.relevance as u8 + self.clarity as u8 + self.tone as u8
    }
}

/// Inputs the evaluator needs beyond the keyword list itself.
#[derive(Debug, Clone, Copy)]
pub struct ClaritySignals {
    /// Cleaned-token count after stopword removal.
    pub cleaned_token_count: usize,
    /// Filler words removed during normalization.
    pub fillers_removed: usize,
    /// Word count of the lowercased response before filler removal.
    pub original_word_count: usize,
}

pub fn evaluate(
    keywords: &[String],
    clarity_signals: ClaritySignals,
    sentiment: &SentimentResult,
    topic_set: &[String],
    cfg: &AnalysisConfig,
) -> RubricResult {
    let overlap = keywords
        .iter()
        .filter(|k| topic_set.iter().any(|t| t == *k))
        .count();
    let relevance = overlap >= cfg.relevance_min_overlap;

    let in_band = clarity_signals.cleaned_token_count >= cfg.clarity_min_tokens
        && clarity_signals.cleaned_token_count <= cfg.clarity_max_tokens;
    let filler_ratio = if clarity_signals.original_word_count == 0 {
        1.0
    } else {
        clarity_signals.fillers_removed as f32 / clarity_signals.original_word_count as f32
    };
    let clarity = in_band && filler_ratio < cfg.clarity_max_filler_ratio;

    let tone = sentiment.label != SentimentLabel::Negative
        && sentiment.confidence >= cfg.tone_min_confidence;

    RubricResult {
        relevance,
        clarity,
        tone,
    }
}
