// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Groundcheck Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for Groundcheck failures.
///
/// A bullet set that fails verification is *not* an error: that outcome
/// is carried by `OverallVerification::passed`. Errors here are caller
/// mistakes only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroundcheckError {
    /// Verification was invoked with zero bullets; the average is undefined.
    #[error("cannot verify an empty bullet list")]
    EmptyBullets,

    /// Configuration error (bad value, unparseable JSON or env var).
    #[error("config error: {0}")]
    Config(String),

    /// Invalid input passed to the engine.
    #[error("validation error: {0}")]
    Validation(String),
}

pub type GroundcheckResult<T> = Result<T, GroundcheckError>;
