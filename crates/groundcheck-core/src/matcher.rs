// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Existence Matcher
// ─────────────────────────────────────────────────────────────────────
//! Decides whether one extracted fact is supported by the source text.
//!
//! Three rules are tried in order, stopping at the first hit:
//! 1. direct case-insensitive substring,
//! 2. numeric core (first numeral, thousands separators stripped),
//! 3. word coverage (every word longer than 3 chars appears somewhere).
//!
//! The rules lean toward accepting borderline matches. Surface paraphrase
//! of grounded content should not sink a bullet.

use std::sync::LazyLock;

use regex::Regex;

use groundcheck_types::MatchKind;

static NUMERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9][0-9,]*(?:\.[0-9]+)?").expect("numeral pattern is valid"));

/// Source text lower-cased once, shared by every fact in a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSource {
    lowered: String,
}

impl NormalizedSource {
    pub fn new(source_text: &str) -> Self {
        Self {
            lowered: source_text.to_lowercase(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.lowered
    }

    /// Substring test; `needle` must already be lower-case.
    pub fn contains(&self, needle: &str) -> bool {
        self.lowered.contains(needle)
    }
}

/// Report which rule, if any, locates `fact` in the source.
pub fn match_fact(fact: &str, source: &NormalizedSource) -> Option<MatchKind> {
    let fact = fact.to_lowercase();

    if source.contains(&fact) {
        return Some(MatchKind::Direct);
    }

    if let Some(numeral) = NUMERAL_RE.find(&fact) {
        let core = numeral.as_str().replace(',', "");
        if source.contains(&core) {
            return Some(MatchKind::NumericCore);
        }
    }

    if covers_significant_words(&fact, source) {
        return Some(MatchKind::WordCoverage);
    }

    None
}

/// Whether `fact` is supported by `source_text`.
pub fn fact_exists(fact: &str, source_text: &str) -> bool {
    match_fact(fact, &NormalizedSource::new(source_text)).is_some()
}

fn covers_significant_words(fact: &str, source: &NormalizedSource) -> bool {
    let cleaned: String = fact
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();
    if cleaned.chars().count() <= 3 {
        return false;
    }

    let mut significant = cleaned
        .split_whitespace()
        .filter(|w| w.chars().count() > 3)
        .peekable();
    if significant.peek().is_none() {
        return false;
    }
    significant.all(|w| source.contains(w))
}
