use serde::{Deserialize, Serialize};

use super::{ScoredMember, SkillTier};

/// Count of members per skill tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub advanced: usize,
    pub intermediate: usize,
    pub beginner: usize,
    pub non_pc_user: usize,
    pub unclassified: usize,
}

impl TierCounts {
    /// Tally the tiers of `members`.
    pub fn from_members<'a>(members: impl IntoIterator<Item = &'a ScoredMember>) -> Self {
        let mut counts = Self::default();
        for m in members {
            counts.increment(m.tier());
        }
        counts
    }

    pub fn get(&self, tier: SkillTier) -> usize {
        match tier {
            SkillTier::Advanced => self.advanced,
            SkillTier::Intermediate => self.intermediate,
            SkillTier::Beginner => self.beginner,
            SkillTier::NonPcUser => self.non_pc_user,
            SkillTier::Unclassified => self.unclassified,
        }
    }

    pub fn increment(&mut self, tier: SkillTier) {
        let slot = match tier {
            SkillTier::Advanced => &mut self.advanced,
            SkillTier::Intermediate => &mut self.intermediate,
            SkillTier::Beginner => &mut self.beginner,
            SkillTier::NonPcUser => &mut self.non_pc_user,
            SkillTier::Unclassified => &mut self.unclassified,
        };
        *slot += 1;
    }

    pub fn total(&self) -> usize {
        SkillTier::DESCENDING.iter().map(|&t| self.get(t)).sum()
    }

    /// Most frequent tier. Ties go to the higher tier; `None` when empty.
    pub fn dominant(&self) -> Option<SkillTier> {
        let mut best: Option<(SkillTier, usize)> = None;
        for tier in SkillTier::DESCENDING {
            let count = self.get(tier);
            if count == 0 {
                continue;
            }
            match best {
                Some((_, c)) if c >= count => {}
                _ => best = Some((tier, count)),
            }
        }
        best.map(|(tier, _)| tier)
    }
}

/// A final cohort: a stable label, its members in order, and their tier tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub label: String,
    pub members: Vec<ScoredMember>,
    pub tier_counts: TierCounts,
}

impl Group {
    pub fn new(label: impl Into<String>, members: Vec<ScoredMember>) -> Self {
        let tier_counts = TierCounts::from_members(&members);
        Self {
            label: label.into(),
            members,
            tier_counts,
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
