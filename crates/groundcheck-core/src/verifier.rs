// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Bullet + Aggregate Verifier
// ─────────────────────────────────────────────────────────────────────
//! Per-bullet confidence scoring and the aggregate accept/reject verdict.
//!
//! A bullet's score is the share of its extracted facts found in the
//! source. Bullets with no extractable facts fall back to word overlap:
//! the share of words longer than four characters that occur in the
//! source. The aggregate verdict requires both enough passing bullets
//! and a high enough mean score.
//!
//! Bullets are scored in parallel; each depends only on itself and the
//! read-only source, and results are joined in input order before the
//! reduction.

use std::sync::Arc;

use rayon::prelude::*;

use groundcheck_types::{
    BulletVerificationResult, GroundcheckError, GroundcheckResult, OverallVerification,
    VerificationConfig,
};

use crate::extract::{FactExtractor, LexicalExtractor};
use crate::matcher::{match_fact, NormalizedSource};

/// Words at or below this many characters are ignored by the fallback.
const FALLBACK_MIN_WORD_CHARS: usize = 4;

/// Fact verifier: extraction, matching, and thresholding.
///
/// Holds no mutable state; one instance can serve any number of
/// concurrent calls.
pub struct FactVerifier {
    config: VerificationConfig,
    extractor: Arc<dyn FactExtractor>,
}

impl Default for FactVerifier {
    fn default() -> Self {
        Self {
            config: VerificationConfig::default(),
            extractor: Arc::new(LexicalExtractor),
        }
    }
}

impl FactVerifier {
    /// Build a verifier from a validated config and extraction strategy.
    pub fn new(
        config: VerificationConfig,
        extractor: Arc<dyn FactExtractor>,
    ) -> GroundcheckResult<Self> {
        config.validate()?;
        Ok(Self { config, extractor })
    }

    /// Build a verifier using the default lexical extractor.
    pub fn with_config(config: VerificationConfig) -> GroundcheckResult<Self> {
        Self::new(config, Arc::new(LexicalExtractor))
    }

    /// Read-only access to config.
    pub fn config(&self) -> &VerificationConfig {
        &self.config
    }

    /// Score one bullet against an already-normalized source.
    pub fn verify_bullet(
        &self,
        bullet: &str,
        source: &NormalizedSource,
        index: usize,
    ) -> BulletVerificationResult {
        let heuristics = &self.config.heuristics;
        let facts = self.extractor.extract(bullet);

        if facts.is_empty() {
            let lowered = bullet.to_lowercase();
            let words: Vec<&str> = lowered
                .split_whitespace()
                .filter(|w| w.chars().count() > FALLBACK_MIN_WORD_CHARS)
                .collect();
            let in_source = words.iter().filter(|w| source.contains(w)).count();
            let ratio = if words.is_empty() {
                0.0
            } else {
                in_source as f64 / words.len() as f64
            };

            let result = BulletVerificationResult {
                index,
                bullet: bullet.to_string(),
                facts_found: Vec::new(),
                facts_missing: Vec::new(),
                confidence_score: percent(ratio),
                passed: ratio >= heuristics.fallback_min_word_ratio,
            };
            log::debug!(
                "bullet {index}: no facts, word overlap {}/{} -> {}%",
                in_source,
                words.len(),
                result.confidence_score
            );
            return result;
        }

        let total = facts.len();
        let (facts_found, facts_missing): (Vec<String>, Vec<String>) = facts
            .into_iter()
            .partition(|fact| match_fact(fact, source).is_some());

        let confidence_score = percent(facts_found.len() as f64 / total as f64);
        let passed = confidence_score >= heuristics.min_bullet_confidence;
        log::debug!(
            "bullet {index}: {}/{total} facts grounded -> {confidence_score}% (missing: {:?})",
            facts_found.len(),
            facts_missing
        );

        BulletVerificationResult {
            index,
            bullet: bullet.to_string(),
            facts_found,
            facts_missing,
            confidence_score,
            passed,
        }
    }

    /// Verify a bullet set using the configured aggregate thresholds.
    pub fn verify<S>(&self, bullets: &[S], source_text: &str) -> GroundcheckResult<OverallVerification>
    where
        S: AsRef<str> + Sync,
    {
        self.verify_with_thresholds(
            bullets,
            source_text,
            self.config.min_passing_bullets,
            self.config.min_average_confidence,
        )
    }

    /// Verify a bullet set against explicit aggregate thresholds.
    ///
    /// Fails only on an empty bullet list. A rejected set is an `Ok`
    /// value with `passed == false` and a rejection reason.
    pub fn verify_with_thresholds<S>(
        &self,
        bullets: &[S],
        source_text: &str,
        min_passing_bullets: usize,
        min_average_confidence: u32,
    ) -> GroundcheckResult<OverallVerification>
    where
        S: AsRef<str> + Sync,
    {
        if bullets.is_empty() {
            return Err(GroundcheckError::EmptyBullets);
        }

        let source = NormalizedSource::new(source_text);
        let bullet_results: Vec<BulletVerificationResult> = bullets
            .par_iter()
            .enumerate()
            .map(|(index, bullet)| self.verify_bullet(bullet.as_ref(), &source, index))
            .collect();

        let passing = bullet_results.iter().filter(|r| r.passed).count();
        let score_sum: u64 = bullet_results
            .iter()
            .map(|r| u64::from(r.confidence_score))
            .sum();
        let average_confidence = (score_sum as f64 / bullet_results.len() as f64).round() as u32;

        let passed = passing >= min_passing_bullets && average_confidence >= min_average_confidence;

        // Count shortfall wins when both thresholds fail.
        let rejection_reason = if passed {
            None
        } else if passing < min_passing_bullets {
            Some(format!(
                "Only {passing} out of {} bullets passed verification (need {min_passing_bullets})",
                bullets.len()
            ))
        } else {
            Some(format!(
                "Average confidence {average_confidence}% is below threshold of {min_average_confidence}%"
            ))
        };

        if let Some(reason) = &rejection_reason {
            log::warn!("FACT VERIFICATION FAILED: {reason}");
        } else {
            log::debug!(
                "fact verification passed: {passing}/{} bullets, average {average_confidence}%",
                bullets.len()
            );
        }

        Ok(OverallVerification {
            passed,
            average_confidence,
            bullet_results,
            rejection_reason,
        })
    }
}

/// Score a single bullet with default heuristics and the lexical extractor.
pub fn verify_bullet(bullet: &str, source_text: &str, index: usize) -> BulletVerificationResult {
    FactVerifier::default().verify_bullet(bullet, &NormalizedSource::new(source_text), index)
}

/// Verify `bullets` against `source_text` with the given aggregate
/// thresholds (5 and 70 in the default deployment).
pub fn verify_bullets<S>(
    bullets: &[S],
    source_text: &str,
    min_passing_bullets: usize,
    min_average_confidence: u32,
) -> GroundcheckResult<OverallVerification>
where
    S: AsRef<str> + Sync,
{
    FactVerifier::default().verify_with_thresholds(
        bullets,
        source_text,
        min_passing_bullets,
        min_average_confidence,
    )
}

/// Fraction in [0, 1] to a rounded whole percentage.
fn percent(fraction: f64) -> u32 {
    (fraction.clamp(0.0, 1.0) * 100.0).round() as u32
}
