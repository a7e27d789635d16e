use serde::{Deserialize, Serialize};

use super::{SkillProfile, SkillTier};

/// One roster entry as supplied by the caller.
///
/// Empty preference strings mean "no preference".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Member {
    pub name: String,
    pub id: String,
    pub skill_text: String,
    pub first_choice: String,
    pub second_choice: String,
}

impl Member {
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        skill_text: impl Into<String>,
        first_choice: impl Into<String>,
        second_choice: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            skill_text: skill_text.into(),
            first_choice: first_choice.into(),
            second_choice: second_choice.into(),
        }
    }
}

/// A member paired with its derived skill profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMember {
    pub member: Member,
    pub profile: SkillProfile,
}

impl ScoredMember {
    pub fn tier(&self) -> SkillTier {
        self.profile.tier
    }

    pub fn id(&self) -> &str {
        &self.member.id
    }
}
