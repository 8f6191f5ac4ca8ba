//! The assembled analysis record — the pipeline's stable wire contract.

use serde::{Deserialize, Serialize};

use crate::analysis::entities::NamedEntity;
use crate::analysis::normalize::NormalizationStages;
use crate::analysis::rubric::RubricResult;
use crate::analysis::sentiment::SentimentResult;

/// Everything the pipeline produced for one response, intermediate stages
/// included. Immutable once assembled; serialized verbatim to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub original_response: String,
    pub preprocessing: NormalizationStages,
    pub tokenized_words: Vec<String>,
    pub lemmatized_words: Vec<String>,
    pub cleaned_tokens: Vec<String>,
    pub keywords: Vec<String>,
    pub named_entities: Vec<NamedEntity>,
    pub sentiment: SentimentResult,
    pub rubric: RubricResult,
    pub overall_score: u8,
}

/// Packages the pipeline artifacts into the final record. Pure aggregation:
/// no computation beyond deriving `overall_score` from the rubric, which
/// keeps the score/rubric invariant true by construction.
#[allow(clippy::too_many_arguments)]
pub fn assemble(
    original_response: String,
    preprocessing: NormalizationStages,
    tokenized_words: Vec<String>,
    lemmatized_words: Vec<String>,
    cleaned_tokens: Vec<String>,
    keywords: Vec<String>,
    named_entities: Vec<NamedEntity>,
    sentiment: SentimentResult,
    rubric: RubricResult,
) -> AnalysisResult {
    debug_assert_eq!(tokenized_words.len(), lemmatized_words.len());
    debug_assert!(cleaned_tokens.iter().all(|t| lemmatized_words.contains(t)));
    debug_assert!(keywords.iter().all(|k| cleaned_tokens.contains(k)));
    debug_assert!((0.0..=1.0).contains(&sentiment.confidence));

    let overall_score = rubric.overall_score();
    AnalysisResult {
        original_response,
        preprocessing,
        tokenized_words,
        lemmatized_words,
        cleaned_tokens,
        keywords,
        named_entities,
        sentiment,
        rubric,
        overall_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::sentiment::SentimentLabel;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> AnalysisResult {
        assemble(
            "I am good at teamwork".to_string(),
            NormalizationStages {
                lowercase: "i am good at teamwork".to_string(),
                no_fillers: "i am good at teamwork".to_string(),
                no_punctuation: "i am good at teamwork".to_string(),
            },
            words(&["i", "am", "good", "at", "teamwork"]),
            words(&["i", "be", "good", "at", "teamwork"]),
            words(&["good", "teamwork"]),
            words(&["teamwork"]),
            vec![],
            SentimentResult {
                label: SentimentLabel::Positive,
                confidence: 0.75,
            },
            RubricResult {
                relevance: true,
                clarity: false,
                tone: true,
            },
        )
    }

    #[test]
    fn test_overall_score_matches_rubric() {
        let result = sample();
        assert_eq!(result.overall_score, 2);
        assert_eq!(result.overall_score, result.rubric.overall_score());
    }

    #[test]
    fn test_serializes_with_stable_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        for field in [
            "original_response",
            "preprocessing",
            "tokenized_words",
            "lemmatized_words",
            "cleaned_tokens",
            "keywords",
            "named_entities",
            "sentiment",
            "rubric",
            "overall_score",
        ] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
        assert!(json["preprocessing"].get("no_fillers").is_some());
        assert_eq!(json["sentiment"]["label"], "POSITIVE");
        assert_eq!(json["rubric"]["relevance"], true);
    }

    #[test]
    fn test_roundtrips_through_json() {
        let result = sample();
        let json = serde_json::to_string(&result).unwrap();
        let back: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
