//! Skill scorer: free-text skill description to `SkillProfile`.

use std::collections::HashSet;

use cohort_core::models::{Member, ScoredMember, SkillProfile, SkillTier};
use tracing::debug;

use crate::composite::detect_composite_tag;
use crate::rules::{self, NO_COMPUTER_WEIGHT};
use crate::tiers::tier_for_score;

/// Separators between statements: ASCII and full-width commas, newlines.
const STATEMENT_SEPARATORS: &[char] = &[',', '、', '，', '\n', '\r'];

/// Split a description into trimmed, non-empty statements.
pub fn split_statements(text: &str) -> Vec<String> {
    text.split(STATEMENT_SEPARATORS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Score one skill description.
///
/// An empty description short-circuits to score 0 / `Beginner`. Any other
/// description whose statements total 0 lands in the `[-999, 0]` range and
/// becomes `NonPcUser`; the two paths are intentionally not unified.
pub fn score_skills(text: &str) -> SkillProfile {
    if text.is_empty() {
        return SkillProfile {
            score: 0,
            tier: SkillTier::Beginner,
            composite_tag: None,
            statements: Vec::new(),
        };
    }

    let statements = split_statements(text);

    if statements.iter().any(|s| rules::signals_no_computer(s)) {
        return SkillProfile {
            score: NO_COMPUTER_WEIGHT,
            tier: SkillTier::NonPcUser,
            composite_tag: None,
            statements,
        };
    }

    let mut score = 0i32;
    let mut matched: HashSet<&str> = HashSet::new();
    for statement in &statements {
        let hits = rules::matching_rules(statement);
        if !hits.is_empty() {
            matched.insert(statement.as_str());
        }
        score = score.saturating_add(hits.iter().map(|r| r.weight).sum::<i32>());
    }

    let composite_tag = detect_composite_tag(&statements, matched.len());

    SkillProfile {
        score,
        tier: tier_for_score(score),
        composite_tag,
        statements,
    }
}

/// Score a description that may be absent. Absent behaves like empty.
pub fn score_optional_skills(text: Option<&str>) -> SkillProfile {
    score_skills(text.unwrap_or_default())
}

/// Score every member of a roster, preserving order.
pub fn score_roster(roster: &[Member]) -> Vec<ScoredMember> {
    let _span = cohort_core::scoring_span!(roster.len()).entered();
    roster
        .iter()
        .map(|member| {
            let profile = score_skills(&member.skill_text);
            debug!(id = %member.id, score = profile.score, tier = %profile.tier, "scored member");
            ScoredMember {
                member: member.clone(),
                profile,
            }
        })
        .collect()
}
