// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Groundcheck Verdict Types
// ─────────────────────────────────────────────────────────────────────

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which existence rule accepted a fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// The fact is a case-insensitive substring of the source.
    Direct,
    /// The bare numeral (separators stripped) occurs in the source.
    NumericCore,
    /// Every significant word of the fact occurs in the source.
    WordCoverage,
}

/// Verification outcome for a single bullet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletVerificationResult {
    /// Position of the bullet in the input list.
    #[serde(rename = "bulletIndex")]
    pub index: usize,
    pub bullet: String,
    /// Extracted facts that were located in the source.
    pub facts_found: Vec<String>,
    /// Extracted facts that were not located in the source.
    pub facts_missing: Vec<String>,
    /// 0 = nothing grounded, 100 = fully grounded.
    pub confidence_score: u32,
    pub passed: bool,
}

impl BulletVerificationResult {
    /// Number of facts extracted from the bullet. Zero on the fallback path.
    pub fn fact_count(&self) -> usize {
        self.facts_found.len() + self.facts_missing.len()
    }
}

/// Aggregate verdict over a whole bullet set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallVerification {
    pub passed: bool,
    /// Rounded mean of every bullet's confidence score.
    pub average_confidence: u32,
    /// One entry per input bullet, in input order.
    pub bullet_results: Vec<BulletVerificationResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl OverallVerification {
    /// Number of bullets that passed individually.
    pub fn passing_count(&self) -> usize {
        self.bullet_results.iter().filter(|r| r.passed).count()
    }
}

impl fmt::Display for BulletVerificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.passed { '✓' } else { '✗' };
        writeln!(
            f,
            "[{mark}] Bullet {} ({}%)",
            self.index + 1,
            self.confidence_score
        )?;
        write!(f, "    \"{}\"", self.bullet)?;
        if !self.facts_found.is_empty() {
            write!(f, "\n    Found: {}", self.facts_found.join(", "))?;
        }
        if !self.facts_missing.is_empty() {
            write!(f, "\n    Missing: {}", self.facts_missing.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for OverallVerification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== FACT VERIFICATION RESULTS ===")?;
        writeln!(
            f,
            "Overall: {}",
            if self.passed { "✓ PASSED" } else { "✗ FAILED" }
        )?;
        writeln!(f, "Average Confidence: {}%", self.average_confidence)?;
        if let Some(reason) = &self.rejection_reason {
            writeln!(f, "Rejection Reason: {reason}")?;
        }
        write!(f, "\nPer-Bullet Results:")?;
        for result in &self.bullet_results {
            write!(f, "\n\n{result}")?;
        }
        Ok(())
    }
}
