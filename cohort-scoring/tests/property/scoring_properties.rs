//! Property tests for cohort-scoring.

use proptest::prelude::*;

use cohort_core::models::SkillTier;
use cohort_scoring::{score_skills, tier_for_score, SKILL_RULES};

fn rule_statement() -> impl Strategy<Value = &'static str> {
    prop::sample::select(SKILL_RULES.iter().map(|r| r.statement).collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn prop_deterministic(text in "[a-zA-Zあ-ん,、\n ]{0,40}") {
        prop_assert_eq!(score_skills(&text), score_skills(&text));
    }

    #[test]
    fn prop_tier_matches_score_on_general_path(
        statements in prop::collection::vec(rule_statement(), 1..8)
    ) {
        let text = statements.join(",");
        let profile = score_skills(&text);
        prop_assert_eq!(profile.tier, tier_for_score(profile.score));
    }

    #[test]
    fn prop_exact_statements_sum_their_weights(
        statements in prop::collection::vec(rule_statement(), 1..8)
    ) {
        let expected: i32 = statements
            .iter()
            .map(|s| SKILL_RULES.iter().find(|r| r.statement == *s).map(|r| r.weight).unwrap_or(0))
            .sum();
        let profile = score_skills(&statements.join("\n"));
        prop_assert_eq!(profile.score, expected);
    }

    #[test]
    fn prop_no_computer_always_wins(
        statements in prop::collection::vec(rule_statement(), 0..6),
        position in 0usize..6,
    ) {
        let mut all: Vec<&str> = statements.clone();
        let at = position.min(all.len());
        all.insert(at, "パソコンを持っていない");
        let profile = score_skills(&all.join("、"));
        prop_assert_eq!(profile.tier, SkillTier::NonPcUser);
        prop_assert!(profile.score < 0);
    }
}
