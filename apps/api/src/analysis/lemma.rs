//! Lemmatization — reduces tokens to base morphological forms.
//!
//! The `Lemmatizer` trait is the seam for swapping the morphological model.
//! The default `RuleLemmatizer` combines an irregular-form table with
//! ordered suffix rules; tokens it does not recognize pass through
//! unchanged, so the output always has one lemma per input token.

use std::collections::HashMap;

/// Morphological model interface. Implementations must be deterministic for
/// a fixed model version and safe to share across concurrent calls.
pub trait Lemmatizer: Send + Sync {
    /// Maps a single lowercased token to its base form.
    fn lemma(&self, token: &str) -> String;

    /// Maps a token sequence, preserving length and order.
    fn lemmatize(&self, tokens: &[String]) -> Vec<String> {
        tokens.iter().map(|t| self.lemma(t)).collect()
    }
}

/// Rule-based English lemmatizer: irregular table first, then plural and
/// inflection suffix rules with Porter-style stem repair.
pub struct RuleLemmatizer {
    irregular: HashMap<&'static str, &'static str>,
}

impl RuleLemmatizer {
    pub fn new() -> Self {
        let irregular: HashMap<&'static str, &'static str> = [
            // be / have / do / go
            ("am", "be"),
            ("is", "be"),
            ("are", "be"),
            ("was", "be"),
            ("were", "be"),
            ("been", "be"),
            ("being", "be"),
            ("has", "have"),
            ("had", "have"),
            ("having", "have"),
            ("did", "do"),
            ("does", "do"),
            ("done", "do"),
            ("doing", "do"),
            ("went", "go"),
            ("goes", "go"),
            ("gone", "go"),
            // frequent strong verbs in interview answers
            ("said", "say"),
            ("made", "make"),
            ("built", "build"),
            ("told", "tell"),
            ("got", "get"),
            ("gotten", "get"),
            ("took", "take"),
            ("taken", "take"),
            ("gave", "give"),
            ("given", "give"),
            ("found", "find"),
            ("thought", "think"),
            ("knew", "know"),
            ("known", "know"),
            ("ran", "run"),
            ("wrote", "write"),
            ("written", "write"),
            ("learnt", "learn"),
            ("felt", "feel"),
            ("kept", "keep"),
            ("met", "meet"),
            ("led", "lead"),
            ("paid", "pay"),
            ("sent", "send"),
            ("spent", "spend"),
            ("taught", "teach"),
            ("brought", "bring"),
            ("bought", "buy"),
            ("grew", "grow"),
            ("grown", "grow"),
            ("spoke", "speak"),
            ("spoken", "speak"),
            ("began", "begin"),
            ("begun", "begin"),
            ("saw", "see"),
            ("seen", "see"),
            ("used", "use"),
            // irregular plurals
            ("men", "man"),
            ("women", "woman"),
            ("children", "child"),
            ("feet", "foot"),
            ("teeth", "tooth"),
            ("mice", "mouse"),
        ]
        .into_iter()
        .collect();
        Self { irregular }
    }
}

impl Default for RuleLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer for RuleLemmatizer {
    fn lemma(&self, token: &str) -> String {
        if let Some(base) = self.irregular.get(token) {
            return (*base).to_string();
        }
        if !token.chars().all(|c| c.is_ascii_alphabetic()) {
            // numbers and mixed tokens pass through unchanged
            return token.to_string();
        }

        // plural suffixes
        if let Some(stem) = token.strip_suffix("ies") {
            if token.len() > 4 {
                return format!("{stem}y");
            }
        }
        if let Some(stem) = token.strip_suffix("sses") {
            return format!("{stem}ss");
        }
        if let Some(stem) = token.strip_suffix('s') {
            if token.len() > 3
                && !token.ends_with("ss")
                && !token.ends_with("us")
                && !token.ends_with("is")
            {
                return stem.to_string();
            }
        }

        // verbal inflections
        if let Some(stem) = token.strip_suffix("ing") {
            if token.len() > 5 {
                return repair_stem(stem);
            }
        }
        if let Some(stem) = token.strip_suffix("ed") {
            if token.len() > 4 {
                return repair_stem(stem);
            }
        }

        token.to_string()
    }
}

/// Porter step-1b repair after stripping "ing"/"ed":
/// restore the silent 'e' ("cod" → "code"), undouble final consonants
/// ("plann" → "plan"), leave multi-syllable stems alone ("listen").
fn repair_stem(stem: &str) -> String {
    if stem.ends_with("at") || stem.ends_with("bl") || stem.ends_with("iz") {
        return format!("{stem}e");
    }
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    if n >= 2 && chars[n - 1] == chars[n - 2] && !is_vowel(chars[n - 1], None) {
        let last = chars[n - 1];
        if last != 'l' && last != 's' && last != 'z' {
            return stem[..stem.len() - 1].to_string();
        }
    }
    if measure(stem) == 1 && ends_cvc(&chars) {
        return format!("{stem}e");
    }
    stem.to_string()
}

/// Porter measure: the number of vowel→consonant transitions in the stem.
fn measure(stem: &str) -> usize {
    let mut m = 0;
    let mut prev_vowel = false;
    let mut prev: Option<char> = None;
    for c in stem.chars() {
        let vowel = is_vowel(c, prev);
        if prev_vowel && !vowel {
            m += 1;
        }
        prev_vowel = vowel;
        prev = Some(c);
    }
    m
}

/// Consonant-vowel-consonant ending where the final consonant is not w/x/y.
fn ends_cvc(chars: &[char]) -> bool {
    let n = chars.len();
    if n < 3 {
        return false;
    }
    let (c1, v, c2) = (chars[n - 3], chars[n - 2], chars[n - 1]);
    !is_vowel(c1, chars.get(n.wrapping_sub(4)).copied())
        && is_vowel(v, Some(c1))
        && !is_vowel(c2, Some(v))
        && !matches!(c2, 'w' | 'x' | 'y')
}

/// 'y' counts as a vowel after a consonant ("try"), as in Porter.
fn is_vowel(c: char, prev: Option<char>) -> bool {
    match c {
        'a' | 'e' | 'i' | 'o' | 'u' => true,
        'y' => prev.map(|p| !matches!(p, 'a' | 'e' | 'i' | 'o' | 'u')).unwrap_or(false),
        _ => false,
    }
}
