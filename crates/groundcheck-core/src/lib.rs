// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Groundcheck Fact Verification Engine
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Lexical fact verification for generated summaries.
//!
//! Given generated bullets and the source text they claim to summarize,
//! decides per bullet whether its checkable facts (numbers, amounts,
//! names, quotes) occur in the source, and aggregates the results into
//! an accept/reject verdict.
//!
//! Pipeline: [`extract`] → [`matcher`] → [`verifier`] → [`guard`].
//!
//! # Invariants
//!
//! 1. **One result per bullet**: `bullet_results[i]` always describes
//!    `bullets[i]`, even though bullets are scored in parallel.
//!
//! 2. **Scores are percentages**: every `confidence_score` and the
//!    `average_confidence` lie in `0..=100`.
//!
//! 3. **Pure**: no state survives a call. Identical inputs give identical
//!    verdicts, and fact lists come out in sorted order.
//!
//! 4. **Rejection is a value**: a failed verdict is `Ok` with
//!    `passed == false`; `Err` is reserved for caller mistakes such as an
//!    empty bullet list.

pub mod extract;
pub mod guard;
pub mod matcher;
pub mod verifier;

pub use extract::{ExternalExtractor, FactExtractor, FactSet, LexicalExtractor};
pub use guard::{GuardOutcome, Guardrail};
pub use matcher::{fact_exists, match_fact, NormalizedSource};
pub use verifier::{verify_bullet, verify_bullets, FactVerifier};
