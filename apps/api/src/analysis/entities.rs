//! Named-entity recognition over the original (case-preserving) response.
//!
//! The `EntityTagger` trait is the seam for swapping the tagger backend.
//! The default `RuleEntityTagger` combines a gazetteer (organizations,
//! places, programming languages, products) with pattern rules for dates,
//! cardinals, and capitalized person names. Longest match wins; output is
//! ordered by first-token position in the source text.

use std::collections::HashMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Fixed entity label vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    Person,
    Org,
    Gpe,
    Date,
    Language,
    Product,
    Cardinal,
}

/// A recognized entity span: the literal text and its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntity {
    pub text: String,
    pub label: EntityLabel,
}

/// Sequence tagger interface. Implementations must be deterministic and
/// safe to share across concurrent calls.
pub trait EntityTagger: Send + Sync {
    fn recognize(&self, text: &str) -> Vec<NamedEntity>;
}

/// Gazetteer- and rule-based tagger.
pub struct RuleEntityTagger {
    /// Case-sensitive gazetteer; multi-word entries joined by single spaces.
    gazetteer: HashMap<&'static str, EntityLabel>,
    /// Longest gazetteer entry, in tokens, bounding the match window.
    max_entry_tokens: usize,
    token_pattern: Regex,
    year_pattern: Regex,
}

impl RuleEntityTagger {
    pub fn new() -> Result<Self, regex::Error> {
        let gazetteer = default_gazetteer();
        let max_entry_tokens = gazetteer
            .keys()
            .map(|k| k.split(' ').count())
            .max()
            .unwrap_or(1);
        Ok(Self {
            gazetteer,
            max_entry_tokens,
            // keeps '+'/'#' attached so "C++" and "C#" stay single tokens
            token_pattern: Regex::new(r"[A-Za-z][A-Za-z0-9+#]*|\d+")?,
            year_pattern: Regex::new(r"^(19|20)\d{2}$")?,
        })
    }
}

impl EntityTagger for RuleEntityTagger {
    fn recognize(&self, text: &str) -> Vec<NamedEntity> {
        let tokens: Vec<&str> = self
            .token_pattern
            .find_iter(text)
            .map(|m| m.as_str())
            .collect();

        let mut entities = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            // gazetteer, longest span first
            let mut matched = false;
            let max_len = self.max_entry_tokens.min(tokens.len() - i);
            for len in (1..=max_len).rev() {
                let span = tokens[i..i + len].join(" ");
                if let Some(&label) = self.gazetteer.get(span.as_str()) {
                    entities.push(NamedEntity { text: span, label });
                    i += len;
                    matched = true;
                    break;
                }
            }
            if matched {
                continue;
            }

            let token = tokens[i];
            if token.chars().all(|c| c.is_ascii_digit()) {
                let label = if self.year_pattern.is_match(token) {
                    EntityLabel::Date
                } else {
                    EntityLabel::Cardinal
                };
                entities.push(NamedEntity {
                    text: token.to_string(),
                    label,
                });
                i += 1;
                continue;
            }

            if let Some(len) = self.person_span_len(&tokens[i..]) {
                entities.push(NamedEntity {
                    text: tokens[i..i + len].join(" "),
                    label: EntityLabel::Person,
                });
                i += len;
                continue;
            }

            i += 1;
        }
        entities
    }
}

impl RuleEntityTagger {
    /// A person span is two or more consecutive capitalized alphabetic
    /// tokens that are not in the gazetteer. Single capitalized words are
    /// too ambiguous (sentence starts), so they are never tagged PERSON.
    fn person_span_len(&self, tokens: &[&str]) -> Option<usize> {
        let mut len = 0;
        for &token in tokens {
            if is_capitalized_word(token) && !self.gazetteer.contains_key(token) {
                len += 1;
            } else {
                break;
            }
        }
        if len >= 2 {
            Some(len)
        } else {
            None
        }
    }
}

fn is_capitalized_word(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_lowercase())
        && token.len() >= 2
}

fn default_gazetteer() -> HashMap<&'static str, EntityLabel> {
    use EntityLabel::*;
    let mut g = HashMap::new();
    for org in [
        "Google", "Microsoft", "Amazon", "Apple", "Meta", "Facebook",
        "Netflix", "IBM", "Intel", "Oracle", "Nvidia", "OpenAI", "Spotify",
        "Airbnb", "Uber", "Stripe",
    ] {
        g.insert(org, Org);
    }
    for gpe in [
        "London", "Paris", "Berlin", "Tokyo", "India", "Germany", "France",
        "Japan", "Canada", "America", "New York", "San Francisco",
        "United States", "United Kingdom", "Seattle", "Austin",
    ] {
        g.insert(gpe, Gpe);
    }
    // programming-language ruler patterns carried over from the coach's
    // original entity rules
    for lang in [
        "Python", "Java", "C++", "JavaScript", "C#", "Go", "Rust", "Swift",
        "Kotlin", "Scala", "TypeScript", "Ruby", "SQL",
    ] {
        g.insert(lang, Language);
    }
    for product in [
        "React", "Django", "Kubernetes", "Docker", "Linux", "Windows",
        "Android", "PostgreSQL", "Redis", "Kafka", "Excel",
    ] {
        g.insert(product, Product);
    }
    g
}
