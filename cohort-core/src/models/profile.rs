use std::fmt;

use serde::{Deserialize, Serialize};

use super::SkillTier;

/// A notable combination of skills. At most one is assigned per member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompositeTag {
    Creator,
    OfficeWorker,
    AllRounder,
}

impl CompositeTag {
    pub fn label(self) -> &'static str {
        match self {
            Self::Creator => "creator type",
            Self::OfficeWorker => "office-worker type",
            Self::AllRounder => "all-rounder type",
        }
    }
}

impl fmt::Display for CompositeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Output of the skill scorer for one skill description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillProfile {
    pub score: i32,
    pub tier: SkillTier,
    pub composite_tag: Option<CompositeTag>,
    /// Trimmed, non-empty skill statements in input order.
    pub statements: Vec<String>,
}
