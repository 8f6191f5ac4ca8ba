//! Keyword extraction — topical tokens from the cleaned sequence.
//!
//! A cleaned token is emitted as a keyword when it belongs to the question's
//! expected-topic set, or when the lightweight content tagger classifies it
//! as a content word (noun/verb/adjective territory). Order and duplicates
//! are preserved; downstream consumers compute frequencies over this list.

use std::collections::HashSet;

use crate::analysis::config::AnalysisConfig;
use crate::analysis::lemma::Lemmatizer;
use crate::analysis::normalize::{normalize, FillerPattern};
use crate::analysis::stopwords::filter_stopwords;
use crate::analysis::tokenize::tokenize;

/// Lightweight part-of-speech capability: decides whether a token carries
/// content (noun, verb, adjective) as opposed to residual function words.
pub trait ContentTagger: Send + Sync {
    fn is_content_word(&self, token: &str) -> bool;
}

/// Heuristic tagger: a token is content unless it is too short, vowel-less,
/// numeric, or a known closed-class leftover (adverbs and similar that
/// survive the stopword filter but are not content parts of speech).
pub struct HeuristicContentTagger {
    non_content: HashSet<&'static str>,
}

impl HeuristicContentTagger {
    pub fn new() -> Self {
        let non_content: HashSet<&'static str> = [
            "always", "often", "sometimes", "usually", "never", "ever",
            "still", "yet", "even", "almost", "maybe", "perhaps", "quite",
            "rather", "however", "therefore", "anyway", "together", "also",
            "instead", "already", "soon", "later", "else", "etc", "via",
            "per", "lot", "lots", "bit",
        ]
        .into_iter()
        .collect();
        Self { non_content }
    }
}

impl Default for HeuristicContentTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentTagger for HeuristicContentTagger {
    fn is_content_word(&self, token: &str) -> bool {
        token.len() >= 3
            && token.chars().any(|c| c.is_ascii_alphabetic())
            && token.chars().any(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
            && !token.chars().all(|c| c.is_ascii_digit())
            && !self.non_content.contains(token)
    }
}

/// Derives the expected-topic keyword set for a question.
///
/// Recognized categories (substring trigger match against the lowercased
/// question) use their configured dictionary. Unrecognized questions fall
/// back to content-word extraction over the question itself, run through
/// the same normalize → tokenize → lemmatize → stopword chain as responses.
pub fn derive_topic_set(
    question: &str,
    cfg: &AnalysisConfig,
    fillers: &FillerPattern,
    lemmatizer: &dyn Lemmatizer,
    tagger: &dyn ContentTagger,
) -> Vec<String> {
    let question_lower = question.to_lowercase();
    for topics in &cfg.question_topics {
        if topics
            .triggers
            .iter()
            .any(|trigger| question_lower.contains(trigger.as_str()))
        {
            return topics.keywords.clone();
        }
    }

    // fallback: the question's own content words, first occurrence order
    let stages = normalize(question, fillers);
    let tokens = tokenize(&stages.no_punctuation);
    let lemmas = lemmatizer.lemmatize(&tokens);
    let cleaned = filter_stopwords(&lemmas, &cfg.stopwords);

    let mut seen = HashSet::new();
    cleaned
        .into_iter()
        .filter(|t| tagger.is_content_word(t.as_str()))
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

/// Selects keywords from the cleaned token sequence.
pub fn extract_keywords(
    cleaned_tokens: &[String],
    topic_set: &[String],
    tagger: &dyn ContentTagger,
) -> Vec<String> {
    cleaned_tokens
        .iter()
        .filter(|token| {
            topic_set.iter().any(|k| k == *token) || tagger.is_content_word(token.as_str())
        })
        .cloned()
        .collect()
}
