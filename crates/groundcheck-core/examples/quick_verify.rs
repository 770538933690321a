//! Runs a grounded and a hallucinated bullet set through the guardrail
//! and prints the verification report for each.
//!
//! `cargo run -p groundcheck-core --example quick_verify`

use groundcheck_core::{GuardOutcome, Guardrail};
use groundcheck_types::GroundcheckResult;

const GROUNDED_SOURCE: &str = "OpenAI announced a major funding round today, raising $500 \
    million in Series C funding led by Sequoia Capital. CEO Sam Altman stated that the company \
    will hire 200 new engineers by the end of 2025. OpenAI currently serves over 2 million \
    active users and processes 10 billion API requests per month.";

const HALLUCINATED_SOURCE: &str = "Tesla announced quarterly earnings today. The company \
    reported strong sales growth in the electric vehicle market. CEO Elon Musk highlighted \
    progress on autonomous driving features.";

fn run(title: &str, bullets: &[&str], source: &str, guard: &Guardrail) -> GroundcheckResult<()> {
    println!("\n{}\n{title}\n{}", "=".repeat(80), "=".repeat(80));
    match guard.check(bullets, source)? {
        GuardOutcome::Bypassed => println!("verification disabled, bullets accepted unverified"),
        GuardOutcome::Accepted(v) | GuardOutcome::Rejected(v) => println!("{v}"),
    }
    Ok(())
}

fn main() -> GroundcheckResult<()> {
    let guard = Guardrail::from_env()?;

    run(
        "Grounded bullets (should PASS)",
        &[
            "OpenAI raised $500 million in Series C funding led by Sequoia Capital",
            "The company plans to hire 200 new engineers by end of 2025",
            "OpenAI currently serves over 2 million active users on the platform",
            "The platform processes approximately 10 billion API requests each month",
            "CEO Sam Altman announced plans to hire new engineers",
            "OpenAI processes API requests for millions of active users",
        ],
        GROUNDED_SOURCE,
        &guard,
    )?;

    run(
        "Hallucinated bullets (should FAIL)",
        &[
            "Tesla raised $2 billion in Series D funding round",
            "The company reported revenue of $50 billion for the quarter",
            "Tesla plans to build 5 new factories in Asia by 2026",
            "CEO Elon Musk announced partnership with Toyota and Honda",
            "The company's stock price surged 45% following the announcement",
            "Tesla delivered 500,000 vehicles in the quarter",
        ],
        HALLUCINATED_SOURCE,
        &guard,
    )
}
