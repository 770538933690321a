// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Groundcheck Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Configuration, verdict records, and error hierarchy for Groundcheck —
//! the lexical fact-verification gate that sits between a summary
//! generator and its caller.

pub mod config;
pub mod error;
pub mod verdict;

pub use config::{HeuristicThresholds, VerificationConfig};
pub use error::{GroundcheckError, GroundcheckResult};
pub use verdict::{BulletVerificationResult, MatchKind, OverallVerification};
