// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Groundcheck Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{GroundcheckError, GroundcheckResult};

/// Env var holding the minimum number of individually passing bullets.
pub const ENV_MIN_PASSING_BULLETS: &str = "FACT_VERIFY_MIN_PASSING_BULLETS";
/// Env var holding the minimum average confidence (0–100).
pub const ENV_MIN_CONFIDENCE: &str = "FACT_VERIFY_MIN_CONFIDENCE";
/// Env var toggling verification. Only the literal `false` disables it.
pub const ENV_ENABLED: &str = "FACT_VERIFY_ENABLED";

/// Per-bullet heuristic constants.
///
/// These are uncalibrated; the defaults are the values the guardrail has
/// always shipped with and should not move without evidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicThresholds {
    /// Facts-free bullets pass when at least this fraction of their
    /// significant words occur in the source.
    /// Default: 0.4.
    pub fallback_min_word_ratio: f64,

    /// Bullets with extracted facts pass when their confidence is >= this.
    /// Default: 60.
    pub min_bullet_confidence: u32,
}

impl Default for HeuristicThresholds {
    fn default() -> Self {
        Self {
            fallback_min_word_ratio: 0.4,
            min_bullet_confidence: 60,
        }
    }
}

/// Runtime configuration for the fact-verification gate.
///
/// Read-only for the duration of a verification call. `enabled` is
/// consumed by the caller-side guardrail, never by the verifier itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    /// Minimum number of bullets that must pass individually.
    /// Default: 5 (one of six may fail). Sensible range for a
    /// six-bullet pipeline is 3–6.
    pub min_passing_bullets: usize,

    /// Minimum mean confidence across all bullets, in percent.
    /// Default: 70.
    pub min_average_confidence: u32,

    /// When false the pipeline skips verification and accepts content
    /// unverified.
    /// Default: true.
    pub enabled: bool,

    /// Per-bullet pass thresholds.
    pub heuristics: HeuristicThresholds,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            min_passing_bullets: 5,
            min_average_confidence: 70,
            enabled: true,
            heuristics: HeuristicThresholds::default(),
        }
    }
}

impl VerificationConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> GroundcheckResult<()> {
        if self.min_average_confidence > 100 {
            return Err(GroundcheckError::Config(format!(
                "min_average_confidence must be in [0, 100], got {}",
                self.min_average_confidence
            )));
        }
        let ratio = self.heuristics.fallback_min_word_ratio;
        if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
            return Err(GroundcheckError::Config(format!(
                "fallback_min_word_ratio must be in [0, 1], got {ratio}"
            )));
        }
        if self.heuristics.min_bullet_confidence > 100 {
            return Err(GroundcheckError::Config(format!(
                "min_bullet_confidence must be in [0, 100], got {}",
                self.heuristics.min_bullet_confidence
            )));
        }
        Ok(())
    }

    /// Load from JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> GroundcheckResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| GroundcheckError::Config(format!("JSON parse error: {e}")))
    }

    /// Load from the process environment.
    pub fn from_env() -> GroundcheckResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (the environment, a map in tests).
    ///
    /// Unset or blank keys keep their defaults; set but unparseable numbers
    /// are an error rather than a silent fallback.
    pub fn from_lookup<F>(lookup: F) -> GroundcheckResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // Blank values count as unset.
        let lookup_set = |key: &str| lookup(key).filter(|raw| !raw.trim().is_empty());

        if let Some(raw) = lookup_set(ENV_MIN_PASSING_BULLETS) {
            config.min_passing_bullets = parse_var(ENV_MIN_PASSING_BULLETS, &raw)?;
        }
        if let Some(raw) = lookup_set(ENV_MIN_CONFIDENCE) {
            config.min_average_confidence = parse_var(ENV_MIN_CONFIDENCE, &raw)?;
        }
        if let Some(raw) = lookup(ENV_ENABLED) {
            config.enabled = raw != "false";
        }

        config.validate()?;
        Ok(config)
    }

    /// Log the active configuration, typically once at startup.
    pub fn log_summary(&self) {
        if !self.enabled {
            log::warn!("FACT VERIFICATION DISABLED: all outputs will pass without verification");
            return;
        }
        log::info!(
            "Fact verification config: min passing bullets {}, min average confidence {}%, \
             fallback word ratio {}, bullet pass score {}",
            self.min_passing_bullets,
            self.min_average_confidence,
            self.heuristics.fallback_min_word_ratio,
            self.heuristics.min_bullet_confidence
        );
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, raw: &str) -> GroundcheckResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| GroundcheckError::Config(format!("{key} must be a non-negative integer, got {raw:?}")))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = VerificationConfig::default();
        assert_eq!(config.min_passing_bullets, 5);
        assert_eq!(config.min_average_confidence, 70);
        assert!(config.enabled);
        assert_eq!(config.heuristics.fallback_min_word_ratio, 0.4);
        assert_eq!(config.heuristics.min_bullet_confidence, 60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_confidence_out_of_range() {
        let config = VerificationConfig {
            min_average_confidence: 101,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(GroundcheckError::Config(_))));
    }

    #[test]
    fn test_validate_ratio_out_of_range() {
        let mut config = VerificationConfig::default();
        config.heuristics.fallback_min_word_ratio = 1.5;
        assert!(config.validate().is_err());
        config.heuristics.fallback_min_word_ratio = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bullet_confidence_out_of_range() {
        let mut config = VerificationConfig::default();
        config.heuristics.min_bullet_confidence = 250;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_partial() {
        let config = VerificationConfig::from_json(r#"{"min_passing_bullets": 4}"#).unwrap();
        assert_eq!(config.min_passing_bullets, 4);
        assert_eq!(config.min_average_confidence, 70);
        assert!(config.enabled);
    }

    #[test]
    fn test_from_json_nested_heuristics() {
        let json = r#"{"heuristics": {"min_bullet_confidence": 75}}"#;
        let config = VerificationConfig::from_json(json).unwrap();
        assert_eq!(config.heuristics.min_bullet_confidence, 75);
        assert_eq!(config.heuristics.fallback_min_word_ratio, 0.4);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = VerificationConfig::from_json("{not json").unwrap_err();
        assert!(err.to_string().contains("JSON parse error"));
    }

    #[test]
    fn test_from_lookup_empty_is_default() {
        let config = VerificationConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, VerificationConfig::default());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = VerificationConfig::from_lookup(lookup_from(&[
            (ENV_MIN_PASSING_BULLETS, "3"),
            (ENV_MIN_CONFIDENCE, " 55 "),
        ]))
        .unwrap();
        assert_eq!(config.min_passing_bullets, 3);
        assert_eq!(config.min_average_confidence, 55);
        assert!(config.enabled);
    }

    #[test]
    fn test_from_lookup_only_literal_false_disables() {
        let disabled =
            VerificationConfig::from_lookup(lookup_from(&[(ENV_ENABLED, "false")])).unwrap();
        assert!(!disabled.enabled);

        let still_on =
            VerificationConfig::from_lookup(lookup_from(&[(ENV_ENABLED, "FALSE")])).unwrap();
        assert!(still_on.enabled);

        let zero = VerificationConfig::from_lookup(lookup_from(&[(ENV_ENABLED, "0")])).unwrap();
        assert!(zero.enabled);
    }

    #[test]
    fn test_from_lookup_empty_value_is_default() {
        let config = VerificationConfig::from_lookup(lookup_from(&[
            (ENV_MIN_PASSING_BULLETS, ""),
            (ENV_MIN_CONFIDENCE, "  "),
            (ENV_ENABLED, ""),
        ]))
        .unwrap();
        assert_eq!(config, VerificationConfig::default());
    }

    #[test]
    fn test_from_lookup_rejects_garbage() {
        let err = VerificationConfig::from_lookup(lookup_from(&[(ENV_MIN_CONFIDENCE, "high")]))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_MIN_CONFIDENCE));
    }

    #[test]
    fn test_from_lookup_validates() {
        let result = VerificationConfig::from_lookup(lookup_from(&[(ENV_MIN_CONFIDENCE, "140")]));
        assert!(result.is_err());
    }
}
