//! Roster, skill and group models shared across the workspace.

pub mod group;
pub mod member;
pub mod profile;
pub mod tier;

pub use group::{Group, TierCounts};
pub use member::{Member, ScoredMember};
pub use profile::{CompositeTag, SkillProfile};
pub use tier::SkillTier;
