//! Lexical normalization — lowercase, filler removal, punctuation strip.
//!
//! Each stage output is retained and shipped to the caller, so reviewers can
//! inspect exactly what the cleaning chain did to a transcript.
//!
//! Contraction policy: apostrophes are stripped with the rest of the
//! punctuation ("i'm" → "im"). Downstream token matching assumes this.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex"));
static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9\s]").expect("static regex"));

/// The three retained normalization stages, in application order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationStages {
    /// Full-string case fold of the raw response.
    pub lowercase: String,
    /// Lowercased text with filler words removed and whitespace collapsed.
    pub no_fillers: String,
    /// Filler-free text with punctuation characters stripped.
    pub no_punctuation: String,
}

/// Word-boundary-aware matcher for the configured filler list, compiled once
/// at pipeline startup.
#[derive(Debug, Clone)]
pub struct FillerPattern {
    regex: Regex,
}

impl FillerPattern {
    /// Compiles the filler list into a single alternation. Longer markers
    /// sort first so phrase fillers ("sort of") win over their prefixes.
    pub fn compile(filler_words: &[String]) -> Result<Self, regex::Error> {
        if filler_words.is_empty() {
            // A class that matches nothing; normalize() becomes a no-op stage.
            return Ok(Self {
                regex: Regex::new(r"[^\s\S]")?,
            });
        }
        let mut escaped: Vec<String> = filler_words.iter().map(|w| regex::escape(w)).collect();
        escaped.sort_by_key(|w| std::cmp::Reverse(w.len()));
        let pattern = format!(r"\b(?:{})\b", escaped.join("|"));
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }
}

/// Runs the full normalization chain on a raw response.
pub fn normalize(text: &str, fillers: &FillerPattern) -> NormalizationStages {
    let lowercase = text.to_lowercase();
    let stripped = fillers.regex.replace_all(&lowercase, "");
    let no_fillers = collapse_whitespace(&stripped);
    let no_punctuation = collapse_whitespace(&PUNCTUATION.replace_all(&no_fillers, ""));
    NormalizationStages {
        lowercase,
        no_fillers,
        no_punctuation,
    }
}

/// Words dropped between two stages, measured by whitespace word count.
/// Feeds the disfluency ratio in the clarity criterion.
pub fn removed_word_count(before: &str, after: &str) -> usize {
    let before = before.split_whitespace().count();
    let after = after.split_whitespace().count();
    before.saturating_sub(after)
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::config::AnalysisConfig;

    fn default_pattern() -> FillerPattern {
        FillerPattern::compile(&AnalysisConfig::default().filler_words).unwrap()
    }

    #[test]
    fn test_lowercase_stage_folds_case() {
        let stages = normalize("I worked at Google.", &default_pattern());
        assert_eq!(stages.lowercase, "i worked at google.");
    }

    #[test]
    fn test_filler_removed_as_whole_word() {
        let stages = normalize("Umm I think I am good at teamwork.", &default_pattern());
        assert_eq!(stages.no_fillers, "i think i am good at teamwork.");
    }

    #[test]
    fn test_filler_not_removed_inside_words() {
        // "so" is a filler but "software" must survive intact
        let stages = normalize("So I write software", &default_pattern());
        assert_eq!(stages.no_fillers, "i write software");
    }

    #[test]
    fn test_phrase_filler_removed() {
        let stages = normalize("It was, you know, hard work", &default_pattern());
        assert!(!stages.no_fillers.contains("you know"));
        assert!(stages.no_fillers.contains("hard work"));
    }

    #[test]
    fn test_no_configured_filler_survives() {
        let cfg = AnalysisConfig::default();
        let pattern = default_pattern();
        let response = "Umm well I mean it was like basically fine, you know?";
        let stages = normalize(response, &pattern);
        let words: Vec<&str> = stages.no_fillers.split_whitespace().collect();
        for filler in &cfg.filler_words {
            if filler.contains(' ') {
                assert!(!stages.no_fillers.contains(filler.as_str()));
            } else {
                assert!(
                    !words.contains(&filler.as_str()),
                    "filler {filler:?} survived: {:?}",
                    stages.no_fillers
                );
            }
        }
    }

    #[test]
    fn test_punctuation_stripped_apostrophes_included() {
        let stages = normalize("I'm a team-player!", &default_pattern());
        assert_eq!(stages.no_punctuation, "im a teamplayer");
    }

    #[test]
    fn test_whitespace_collapsed_after_removal() {
        let stages = normalize("good   at, umm,  teamwork", &default_pattern());
        assert_eq!(stages.no_punctuation, "good at teamwork");
    }

    #[test]
    fn test_empty_filler_list_is_noop_stage() {
        let pattern = FillerPattern::compile(&[]).unwrap();
        let stages = normalize("Umm hello there", &pattern);
        assert_eq!(stages.no_fillers, "umm hello there");
    }

    #[test]
    fn test_removed_word_count() {
        assert_eq!(removed_word_count("umm i am good", "i am good"), 1);
        assert_eq!(removed_word_count("i am good", "i am good"), 0);
        // never underflows even if stages gained words somehow
        assert_eq!(removed_word_count("one", "one two"), 0);
    }
}
