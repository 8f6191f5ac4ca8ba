//! Sentiment classification over the original (case/punctuation-preserving)
//! response, since emphasis cues like exclamation marks carry tone.
//!
//! The `SentimentModel` trait is the seam for swapping the classifier.
//! The default `LexiconSentimentModel` counts polarity-lexicon hits with
//! negation flipping and exclamation emphasis. Deterministic by design.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

/// Chosen label and the classifier's probability estimate for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    pub confidence: f32,
}

/// Classifier interface. Implementations must be deterministic for a fixed
/// model version and safe to share across concurrent calls.
pub trait SentimentModel: Send + Sync {
    fn classify(&self, text: &str) -> SentimentResult;
}

/// How far back a negator ("not", "never") reaches to flip polarity.
const NEGATION_WINDOW: usize = 2;
/// Confidence weight each exclamation mark adds to a non-neutral call.
const EXCLAMATION_BOOST: f32 = 0.5;
/// Confidence reported for NEUTRAL (no polarity evidence either way).
const NEUTRAL_CONFIDENCE: f32 = 0.5;

pub struct LexiconSentimentModel {
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
    negators: HashSet<&'static str>,
}

impl LexiconSentimentModel {
    pub fn new() -> Self {
        Self {
            positive: POSITIVE_WORDS.iter().copied().collect(),
            negative: NEGATIVE_WORDS.iter().copied().collect(),
            negators: ["not", "never", "no", "nothing", "hardly", "barely"]
                .into_iter()
                .collect(),
        }
    }
}

impl Default for LexiconSentimentModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentModel for LexiconSentimentModel {
    fn classify(&self, text: &str) -> SentimentResult {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered.unicode_words().collect();

        let mut positive_hits = 0.0_f32;
        let mut negative_hits = 0.0_f32;
        for (i, word) in words.iter().enumerate() {
            let negated = words[i.saturating_sub(NEGATION_WINDOW)..i]
                .iter()
                .any(|w| self.negators.contains(w));
            if self.positive.contains(word) {
                if negated {
                    negative_hits += 1.0;
                } else {
                    positive_hits += 1.0;
                }
            } else if self.negative.contains(word) {
                if negated {
                    positive_hits += 1.0;
                } else {
                    negative_hits += 1.0;
                }
            }
        }

        // exclamation marks amplify whichever polarity is already winning
        let exclamations = text.matches('!').count().min(3) as f32;
        if positive_hits > negative_hits {
            positive_hits += exclamations * EXCLAMATION_BOOST;
        } else if negative_hits > positive_hits {
            negative_hits += exclamations * EXCLAMATION_BOOST;
        }

        let total = positive_hits + negative_hits;
        if total == 0.0 {
            return SentimentResult {
                label: SentimentLabel::Neutral,
                confidence: NEUTRAL_CONFIDENCE,
            };
        }

        let margin = (positive_hits - negative_hits).abs();
        let confidence = (0.5 + 0.5 * margin / (total + 1.0)).clamp(0.0, 1.0);
        let label = if positive_hits > negative_hits {
            SentimentLabel::Positive
        } else if negative_hits > positive_hits {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };
        SentimentResult { label, confidence }
    }
}

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "awesome", "fantastic",
    "love", "loved", "enjoy", "enjoyed", "passionate", "happy", "excited",
    "exciting", "proud", "confident", "strong", "best", "better",
    "success", "successful", "succeeded", "achieve", "achieved",
    "accomplish", "accomplished", "improve", "improved", "improvement",
    "effective", "efficient", "motivated", "positive", "win", "won",
    "learn", "learned", "learning", "growth", "grow", "helpful",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "hate", "hated", "worst",
    "poor", "useless", "boring", "angry", "annoyed", "annoying",
    "frustrated", "frustrating", "stressful", "stressed", "unhappy",
    "disappointed", "disappointing", "fail", "failed", "failure",
    "mistake", "mistakes", "blame", "quit", "fired", "toxic", "wrong",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LexiconSentimentModel {
        LexiconSentimentModel::new()
    }

    #[test]
    fn test_positive_response() {
        let result = model().classify("I'm really passionate about coding and I love it.");
        assert_eq!(result.label, SentimentLabel::Positive);
        assert!(result.confidence >= 0.5);
    }

    #[test]
    fn test_negative_response() {
        let result = model().classify("It was a terrible, frustrating project and we failed.");
        assert_eq!(result.label, SentimentLabel::Negative);
        assert!(result.confidence >= 0.5);
    }

    #[test]
    fn test_neutral_when_no_polarity_words() {
        let result = model().classify("I worked on a database migration last year.");
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert!((result.confidence - NEUTRAL_CONFIDENCE).abs() < f32::EPSILON);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let result = model().classify("The project was not good.");
        assert_eq!(result.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_exclamation_raises_confidence() {
        let m = model();
        let plain = m.classify("I love this work");
        let emphatic = m.classify("I love this work!!");
        assert_eq!(emphatic.label, SentimentLabel::Positive);
        assert!(emphatic.confidence > plain.confidence);
    }

    #[test]
    fn test_confidence_always_in_unit_interval() {
        let m = model();
        for text in [
            "",
            "great great great great great great!!!",
            "terrible awful horrible worst!!!",
            "fine",
        ] {
            let result = m.classify(text);
            assert!(
                (0.0..=1.0).contains(&result.confidence),
                "confidence {} out of range for {text:?}",
                result.confidence
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let m = model();
        let a = m.classify("I enjoyed the challenge and learned a lot.");
        let b = m.classify("I enjoyed the challenge and learned a lot.");
        assert_eq!(a, b);
    }

    #[test]
    fn test_mixed_polarity_balances_to_neutral() {
        let result = model().classify("Some parts were good, some were bad.");
        assert_eq!(result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_serde_labels_are_uppercase() {
        let json = serde_json::to_string(&SentimentLabel::Positive).unwrap();
        assert_eq!(json, r#""POSITIVE""#);
    }
}
