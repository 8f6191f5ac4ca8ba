//! Named configuration for the analysis pipeline.
//!
//! Every behavioral tunable lives here — filler list, stopword set,
//! per-question topic dictionaries, and rubric thresholds — so tests and
//! deployments can override behavior without touching pipeline code.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::analysis::stopwords::default_stopword_set;

/// Expected-topic keywords for a recognized question category.
///
/// A category matches when any of its `triggers` occurs as a substring of
/// the lowercased question text. `keywords` is the expected-topic set used
/// for keyword extraction and the relevance criterion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionTopics {
    pub triggers: Vec<String>,
    pub keywords: Vec<String>,
}

/// All behavioral tunables of the analysis pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Disfluency markers removed during normalization (whole-word matches).
    pub filler_words: Vec<String>,
    /// Lemmas excluded from the cleaned token sequence.
    pub stopwords: HashSet<String>,
    /// Per-question topic dictionaries, checked in order; first match wins.
    /// Unrecognized questions fall back to content-word extraction.
    pub question_topics: Vec<QuestionTopics>,
    /// Minimum keyword/topic-set overlap for the relevance criterion to pass.
    pub relevance_min_overlap: usize,
    /// Clarity passes only when the cleaned token count is inside
    /// `[clarity_min_tokens, clarity_max_tokens]`.
    pub clarity_min_tokens: usize,
    pub clarity_max_tokens: usize,
    /// Clarity fails when removed fillers exceed this share of the original
    /// word count.
    pub clarity_max_filler_ratio: f32,
    /// Tone passes only for non-NEGATIVE labels at or above this confidence.
    /// NEUTRAL exactly at the cutoff counts as a pass.
    pub tone_min_confidence: f32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            filler_words: default_filler_words(),
            stopwords: default_stopword_set(),
            question_topics: default_question_topics(),
            relevance_min_overlap: 1,
            clarity_min_tokens: 5,
            clarity_max_tokens: 120,
            clarity_max_filler_ratio: 0.25,
            tone_min_confidence: 0.5,
        }
    }
}

/// Spoken-language disfluency markers stripped before tokenization.
/// Multi-word markers ("you know", "sort of") are matched as phrases.
fn default_filler_words() -> Vec<String> {
    [
        "umm", "uh", "erm", "hmm", "hmmm", "mm", "huh", "ah", "oh",
        "like", "you know", "i mean", "actually", "basically", "literally",
        "seriously", "okay", "ok", "so", "well", "right", "yeah", "yep",
        "y'know", "sort of", "kind of", "kinda", "just", "really", "anyway",
        "alright", "gotcha", "look", "see", "stuff", "things", "whatever",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Topic dictionaries for the interview questions the coach ships with.
fn default_question_topics() -> Vec<QuestionTopics> {
    fn topics(triggers: &[&str], keywords: &[&str]) -> QuestionTopics {
        QuestionTopics {
            triggers: triggers.iter().map(|s| s.to_string()).collect(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
        }
    }

    vec![
        topics(
            &["teamwork", "work in a team", "working with a team"],
            &[
                "teamwork",
                "collaboration",
                "team",
                "group",
                "work together",
                "collaborate",
                "cooperate",
            ],
        ),
        topics(
            &["challenging project", "difficult project", "challenge"],
            &[
                "project", "challenge", "difficult", "problem", "solve",
                "solution", "overcome", "deadline",
            ],
        ),
        topics(
            &["technical skills", "skills", "technologies"],
            &[
                "skill",
                "technology",
                "programming",
                "language",
                "framework",
                "tool",
                "code",
                "software",
                "python",
                "javascript",
                "react",
                "java",
                "rust",
                "sql",
            ],
        ),
        topics(
            &["conflict", "disagreement"],
            &[
                "conflict",
                "disagreement",
                "resolve",
                "communication",
                "communicate",
                "listen",
                "compromise",
                "perspective",
            ],
        ),
        topics(
            &["failed", "failure", "mistake"],
            &[
                "failure", "fail", "mistake", "learn", "lesson", "improve",
                "grow", "feedback",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds_are_sane() {
        let cfg = AnalysisConfig::default();
        assert_eq!(cfg.relevance_min_overlap, 1);
        assert!(cfg.clarity_min_tokens < cfg.clarity_max_tokens);
        assert!(cfg.clarity_max_filler_ratio > 0.0 && cfg.clarity_max_filler_ratio < 1.0);
        assert!(cfg.tone_min_confidence >= 0.0 && cfg.tone_min_confidence <= 1.0);
    }

    #[test]
    fn test_default_fillers_include_common_disfluencies() {
        let cfg = AnalysisConfig::default();
        for filler in ["umm", "uh", "you know", "i mean", "like"] {
            assert!(
                cfg.filler_words.iter().any(|f| f == filler),
                "missing filler {filler:?}"
            );
        }
    }

    #[test]
    fn test_teamwork_dictionary_matches_original_keywords() {
        let cfg = AnalysisConfig::default();
        let teamwork = cfg
            .question_topics
            .iter()
            .find(|t| t.triggers.iter().any(|tr| tr == "teamwork"))
            .expect("teamwork category present");
        for kw in ["teamwork", "collaboration", "team", "group", "work together"] {
            assert!(teamwork.keywords.iter().any(|k| k == kw), "missing {kw:?}");
        }
    }

    #[test]
    fn test_no_filler_is_a_stopword_duplicate_surprise() {
        // Fillers are removed pre-tokenization; stopwords post-lemmatization.
        // Overlap is allowed, but both sets must be lowercase so matching
        // stays case-insensitive against lowercased text.
        let cfg = AnalysisConfig::default();
        for f in &cfg.filler_words {
            assert_eq!(f, &f.to_lowercase());
        }
        for s in &cfg.stopwords {
            assert_eq!(s, &s.to_lowercase());
        }
    }
}
