use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete skill level derived from a skill score.
///
/// Ordered `Advanced > Intermediate > Beginner > NonPcUser > Unclassified`
/// for sorting and balancing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillTier {
    Advanced,
    Intermediate,
    Beginner,
    NonPcUser,
    #[default]
    Unclassified,
}

impl SkillTier {
    /// All tiers, highest first.
    pub const DESCENDING: [SkillTier; 5] = [
        SkillTier::Advanced,
        SkillTier::Intermediate,
        SkillTier::Beginner,
        SkillTier::NonPcUser,
        SkillTier::Unclassified,
    ];

    /// Position in the total order; higher is more skilled.
    pub fn rank(self) -> u8 {
        match self {
            Self::Unclassified => 0,
            Self::NonPcUser => 1,
            Self::Beginner => 2,
            Self::Intermediate => 3,
            Self::Advanced => 4,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Advanced => "advanced",
            Self::Intermediate => "intermediate",
            Self::Beginner => "beginner",
            Self::NonPcUser => "non-PC user",
            Self::Unclassified => "unclassified",
        }
    }
}

impl PartialOrd for SkillTier {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SkillTier {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for SkillTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
