//! Word tokenization over normalized text.

use unicode_segmentation::UnicodeSegmentation;

/// Splits normalized text into word tokens using Unicode word boundaries.
///
/// The input has already been lowercased and stripped of punctuation, so in
/// practice this is whitespace splitting; `unicode_words` additionally
/// guarantees no empty tokens and sane behavior on any residual symbols.
pub fn tokenize(normalized_text: &str) -> Vec<String> {
    normalized_text
        .unicode_words()
        .map(|w| w.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        assert_eq!(
            tokenize("i am good at teamwork"),
            vec!["i", "am", "good", "at", "teamwork"]
        );
    }

    #[test]
    fn test_empty_string_yields_empty_sequence() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_no_token_is_empty() {
        let tokens = tokenize("a  team of 5 people");
        assert!(tokens.iter().all(|t| !t.is_empty()));
        assert_eq!(tokens, vec!["a", "team", "of", "5", "people"]);
    }

    #[test]
    fn test_order_preserved_from_source() {
        let tokens = tokenize("build a python application at google");
        assert_eq!(tokens.first().map(String::as_str), Some("build"));
        assert_eq!(tokens.last().map(String::as_str), Some("google"));
    }
}
