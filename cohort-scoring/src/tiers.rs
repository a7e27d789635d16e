//! Score → tier range table.

use cohort_core::models::SkillTier;

/// Inclusive score range mapped to a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierRange {
    pub min: i32,
    pub max: i32,
    pub tier: SkillTier,
}

impl TierRange {
    pub fn contains(&self, score: i32) -> bool {
        (self.min..=self.max).contains(&score)
    }
}

/// Ascending ranges: tier-1 non-PC user up to tier-4 advanced.
pub const TIER_RANGES: &[TierRange] = &[
    TierRange { min: -999, max: 0, tier: SkillTier::NonPcUser },
    TierRange { min: 1, max: 4, tier: SkillTier::Beginner },
    TierRange { min: 5, max: 10, tier: SkillTier::Intermediate },
    TierRange { min: 11, max: i32::MAX, tier: SkillTier::Advanced },
];

/// Tier for a total score. Scores outside every range are `Unclassified`.
pub fn tier_for_score(score: i32) -> SkillTier {
    TIER_RANGES
        .iter()
        .find(|r| r.contains(score))
        .map(|r| r.tier)
        .unwrap_or(SkillTier::Unclassified)
}
