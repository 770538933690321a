// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Output Guardrail
// ─────────────────────────────────────────────────────────────────────
//! Caller-side gate in front of the verifier.
//!
//! The verifier has no notion of being switched off. The `enabled` flag
//! lives here: when it is false, generated content is passed through
//! unverified and the verifier is never invoked.

use std::sync::Arc;

use groundcheck_types::{GroundcheckResult, OverallVerification, VerificationConfig};

use crate::extract::FactExtractor;
use crate::verifier::FactVerifier;

/// Outcome of running generated bullets through the guardrail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Verification disabled; content accepted without checks.
    Bypassed,
    /// Verification ran and the bullets are grounded.
    Accepted(OverallVerification),
    /// Verification ran and the bullets were rejected.
    Rejected(OverallVerification),
}

impl GuardOutcome {
    /// True unless verification ran and failed.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, GuardOutcome::Rejected(_))
    }

    /// The verdict, when verification actually ran.
    pub fn verification(&self) -> Option<&OverallVerification> {
        match self {
            GuardOutcome::Bypassed => None,
            GuardOutcome::Accepted(v) | GuardOutcome::Rejected(v) => Some(v),
        }
    }

    pub fn rejection_reason(&self) -> Option<&str> {
        match self {
            GuardOutcome::Rejected(v) => v.rejection_reason.as_deref(),
            _ => None,
        }
    }
}

pub struct Guardrail {
    verifier: FactVerifier,
}

impl Guardrail {
    /// Build a guardrail with the default lexical extractor.
    pub fn new(config: VerificationConfig) -> GroundcheckResult<Self> {
        Ok(Self {
            verifier: FactVerifier::with_config(config)?,
        })
    }

    pub fn with_extractor(
        config: VerificationConfig,
        extractor: Arc<dyn FactExtractor>,
    ) -> GroundcheckResult<Self> {
        Ok(Self {
            verifier: FactVerifier::new(config, extractor)?,
        })
    }

    /// Build from `FACT_VERIFY_*` environment variables and log the result.
    pub fn from_env() -> GroundcheckResult<Self> {
        let config = VerificationConfig::from_env()?;
        config.log_summary();
        Self::new(config)
    }

    pub fn config(&self) -> &VerificationConfig {
        self.verifier.config()
    }

    /// Check generated bullets against their source text.
    ///
    /// Errors only on caller mistakes (empty bullet list while enabled).
    pub fn check<S>(&self, bullets: &[S], source_text: &str) -> GroundcheckResult<GuardOutcome>
    where
        S: AsRef<str> + Sync,
    {
        if !self.config().enabled {
            log::warn!(
                "fact verification disabled, accepting {} bullets unverified",
                bullets.len()
            );
            return Ok(GuardOutcome::Bypassed);
        }

        let verification = self.verifier.verify(bullets, source_text)?;
        if verification.passed {
            Ok(GuardOutcome::Accepted(verification))
        } else {
            Ok(GuardOutcome::Rejected(verification))
        }
    }
}
