use groundcheck_core::{verify_bullets, FactExtractor, LexicalExtractor};
use proptest::prelude::*;

fn bullets_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z0-9$%,.\" ]{0,48}", 1..8)
}

fn source_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9$%,. ]{0,160}"
}

proptest! {
    #[test]
    fn one_result_per_bullet_in_order(bullets in bullets_strategy(), source in source_strategy()) {
        let overall = verify_bullets(&bullets, &source, 5, 70).unwrap();
        prop_assert_eq!(overall.bullet_results.len(), bullets.len());
        for (i, r) in overall.bullet_results.iter().enumerate() {
            prop_assert_eq!(r.index, i);
            prop_assert_eq!(&r.bullet, &bullets[i]);
        }
    }

    #[test]
    fn scores_are_percentages(bullets in bullets_strategy(), source in source_strategy()) {
        let overall = verify_bullets(&bullets, &source, 5, 70).unwrap();
        prop_assert!(overall.average_confidence <= 100);
        for r in &overall.bullet_results {
            prop_assert!(r.confidence_score <= 100);
        }
    }

    #[test]
    fn average_is_rounded_mean(bullets in bullets_strategy(), source in source_strategy()) {
        let overall = verify_bullets(&bullets, &source, 5, 70).unwrap();
        let sum: u32 = overall.bullet_results.iter().map(|r| r.confidence_score).sum();
        let mean = f64::from(sum) / overall.bullet_results.len() as f64;
        prop_assert_eq!(overall.average_confidence, mean.round() as u32);
    }

    #[test]
    fn deterministic(bullets in bullets_strategy(), source in source_strategy()) {
        let first = verify_bullets(&bullets, &source, 5, 70).unwrap();
        let second = verify_bullets(&bullets, &source, 5, 70).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn stricter_thresholds_never_flip_to_pass(
        bullets in bullets_strategy(),
        source in source_strategy(),
        min_passing in 0usize..8,
        min_conf in 0u32..=100,
        extra_passing in 0usize..4,
        extra_conf in 0u32..=30,
    ) {
        let base = verify_bullets(&bullets, &source, min_passing, min_conf).unwrap();
        let strict = verify_bullets(
            &bullets,
            &source,
            min_passing + extra_passing,
            (min_conf + extra_conf).min(100),
        )
        .unwrap();
        if !base.passed {
            prop_assert!(!strict.passed);
        }
        prop_assert_eq!(base.passed, base.rejection_reason.is_none());
    }

    #[test]
    fn missing_facts_are_never_verbatim_in_source(
        bullets in bullets_strategy(),
        source in source_strategy(),
    ) {
        let lowered = source.to_lowercase();
        let overall = verify_bullets(&bullets, &source, 5, 70).unwrap();
        for r in &overall.bullet_results {
            for fact in &r.facts_missing {
                prop_assert!(!lowered.contains(fact.as_str()), "{} is in the source", fact);
            }
        }
    }

    #[test]
    fn verbatim_source_span_is_found(
        source in "[A-Za-z0-9$%,. ]{10,160}",
        start in 0usize..150,
        len in 1usize..40,
    ) {
        let start = start.min(source.len() - 1);
        let end = (start + len).min(source.len());
        let bullet = &source[start..end];
        let facts = LexicalExtractor.extract(bullet);
        let overall = verify_bullets(&[bullet], &source, 1, 0).unwrap();
        let lowered = source.to_lowercase();
        for fact in facts.iter().filter(|f| lowered.contains(f.as_str())) {
            prop_assert!(overall.bullet_results[0].facts_found.contains(fact));
        }
    }

    #[test]
    fn unrelated_vocabulary_never_passes(
        words in prop::collection::vec("[N-Zn-z]{1,9}", 1..12),
        source in "[a-m ]{0,160}",
    ) {
        let bullet = words.join(" ");
        let overall = verify_bullets(&[bullet.as_str()], &source, 1, 0).unwrap();
        prop_assert!(!overall.bullet_results[0].passed);
        prop_assert!(!overall.passed);
    }
}
