// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Fact Extractor
// ─────────────────────────────────────────────────────────────────────
//! Fact extraction trait and the default lexical implementation.
//!
//! A "fact" is any token in a generated bullet that can be checked
//! against the source: amounts, percentages, numbers, years, quoted
//! spans, and capitalized names. The capitalization rules are tied to
//! English orthography, so the strategy sits behind [`FactExtractor`]
//! and can be replaced without touching matching or aggregation.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Deduplicated, normalized facts from one bullet. Ordered so results are
/// reproducible across runs.
pub type FactSet = BTreeSet<String>;

/// Trait for fact extraction strategies.
pub trait FactExtractor: Send + Sync {
    fn extract(&self, bullet: &str) -> FactSet;
}

static MONEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\$[0-9,]+(?:\.[0-9]+)?(?:\s*(?:million|billion|trillion|m|b|t))?")
        .expect("money pattern is valid")
});

static PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?%").expect("percent pattern is valid"));

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[0-9]+(?:,[0-9]{3})*(?:\.[0-9]+)?(?:\s*(?:million|billion|trillion))?")
        .expect("number pattern is valid")
});

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}").expect("year pattern is valid"));

static QUOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)""#).expect("quote pattern is valid"));

static PHRASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+){2,}\b").expect("phrase pattern is valid")
});

/// Capitalized words that never count as proper nouns.
const STOP_WORDS: [&str; 14] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

/// Default rule-based extractor.
///
/// Every rule runs independently over the whole bullet; results are
/// unioned, lower-cased, and trimmed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalExtractor;

impl LexicalExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FactExtractor for LexicalExtractor {
    fn extract(&self, bullet: &str) -> FactSet {
        let mut facts = FactSet::new();

        for pattern in [&*MONEY_RE, &*PERCENT_RE, &*NUMBER_RE, &*YEAR_RE] {
            for m in pattern.find_iter(bullet) {
                insert_fact(&mut facts, m.as_str());
            }
        }

        for caps in QUOTE_RE.captures_iter(bullet) {
            if let Some(inner) = caps.get(1) {
                insert_fact(&mut facts, inner.as_str());
            }
        }

        for word in bullet.split_whitespace() {
            if is_proper_noun_candidate(word) {
                insert_fact(&mut facts, word);
            }
        }

        for m in PHRASE_RE.find_iter(bullet) {
            insert_fact(&mut facts, m.as_str());
        }

        facts
    }
}

/// A word qualifies when its ASCII-letter core is longer than two
/// characters, starts uppercase, and is not a stop word. Punctuation
/// stays on the emitted fact; the matcher tolerates it.
fn is_proper_noun_candidate(word: &str) -> bool {
    let core: String = word.chars().filter(char::is_ascii_alphabetic).collect();
    if core.len() <= 2 {
        return false;
    }
    let starts_upper = core.chars().next().is_some_and(|c| c.is_ascii_uppercase());
    starts_upper && !STOP_WORDS.contains(&core.to_ascii_lowercase().as_str())
}

fn insert_fact(facts: &mut FactSet, raw: &str) {
    let normalized = raw.to_lowercase();
    let normalized = normalized.trim();
    if !normalized.is_empty() {
        facts.insert(normalized.to_string());
    }
}

/// Extractor that delegates to a caller-supplied function.
///
/// Lets a host plug in its own strategy (another language's casing
/// rules, an NER service) while keeping the rest of the pipeline.
type ExtractFn = Box<dyn Fn(&str) -> FactSet + Send + Sync>;

pub struct ExternalExtractor {
    extract_fn: ExtractFn,
}

impl ExternalExtractor {
    pub fn new(extract_fn: impl Fn(&str) -> FactSet + Send + Sync + 'static) -> Self {
        Self {
            extract_fn: Box::new(extract_fn),
        }
    }
}

impl FactExtractor for ExternalExtractor {
    fn extract(&self, bullet: &str) -> FactSet {
        (self.extract_fn)(bullet)
    }
}
