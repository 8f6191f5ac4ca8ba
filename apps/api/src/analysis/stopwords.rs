//! Stopword filtering — drops non-content lemmas from the cleaned sequence.

use std::collections::HashSet;

/// Removes stopwords from a lemma sequence. Order and duplicates are
/// preserved; the output is a subsequence, not a set.
///
/// Lemmas arrive already lowercased (the normalizer lowercases the whole
/// transcript), so membership is a direct lookup.
pub fn filter_stopwords(lemmas: &[String], stopwords: &HashSet<String>) -> Vec<String> {
    lemmas
        .iter()
        .filter(|lemma| !stopwords.contains(lemma.as_str()))
        .cloned()
        .collect()
}

/// Standard English stopword list. High-frequency function words only;
/// content words never belong here, however common.
pub fn default_stopword_set() -> HashSet<String> {
    [
        // articles & determiners
        "a", "an", "the", "this", "that", "these", "those", "each", "every",
        "either", "neither", "both", "all", "any", "some", "such", "own",
        "same", "other", "another",
        // pronouns
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you",
        "your", "yours", "yourself", "yourselves", "he", "him", "his",
        "himself", "she", "her", "hers", "herself", "it", "its", "itself",
        "they", "them", "their", "theirs", "themselves", "who", "whom",
        "whose", "which", "what",
        // be / auxiliaries / modals
        "am", "is", "are", "was", "were", "be", "been", "being", "have",
        "has", "had", "having", "do", "does", "did", "doing", "will",
        "would", "shall", "should", "may", "might", "must", "can", "could",
        "ought",
        // prepositions
        "at", "by", "for", "from", "in", "into", "of", "on", "onto", "to",
        "with", "within", "without", "about", "against", "between", "among",
        "through", "during", "before", "after", "above", "below", "up",
        "down", "out", "off", "over", "under",
        // conjunctions & negation
        "and", "but", "or", "nor", "not", "no", "if", "because", "as",
        "until", "while", "although", "though", "than", "then", "once",
        "again", "further",
        // adverbs & other function words
        "here", "there", "when", "where", "why", "how", "few", "more",
        "most", "only", "too", "very", "s", "t", "don", "now",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemmas(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_filter_removes_stopwords_preserving_order() {
        let stopwords = default_stopword_set();
        let input = lemmas(&["i", "be", "good", "at", "teamwork"]);
        let cleaned = filter_stopwords(&input, &stopwords);
        assert_eq!(cleaned, lemmas(&["good", "teamwork"]));
    }

    #[test]
    fn test_filter_preserves_duplicates() {
        let stopwords = default_stopword_set();
        let input = lemmas(&["team", "the", "team", "work", "team"]);
        let cleaned = filter_stopwords(&input, &stopwords);
        assert_eq!(cleaned, lemmas(&["team", "team", "work", "team"]));
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let stopwords = default_stopword_set();
        assert!(filter_stopwords(&[], &stopwords).is_empty());
    }

    #[test]
    fn test_no_output_element_is_a_stopword() {
        let stopwords = default_stopword_set();
        let input = lemmas(&["the", "quick", "brown", "fox", "is", "over", "it"]);
        let cleaned = filter_stopwords(&input, &stopwords);
        assert!(cleaned.iter().all(|l| !stopwords.contains(l.as_str())));
        assert_eq!(cleaned, lemmas(&["quick", "brown", "fox"]));
    }

    #[test]
    fn test_content_words_survive() {
        let stopwords = default_stopword_set();
        for word in ["teamwork", "google", "python", "build", "good"] {
            assert!(!stopwords.contains(word), "{word:?} must not be a stopword");
        }
    }
}
