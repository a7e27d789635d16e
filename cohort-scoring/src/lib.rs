//! # cohort-scoring
//!
//! Maps free-text skill descriptions to a score, a skill tier and an optional
//! composite-skill tag. Pure functions over fixed, ordered rule tables.

pub mod composite;
pub mod rules;
pub mod scorer;
pub mod tiers;

pub use composite::detect_composite_tag;
pub use rules::{SkillRule, NO_COMPUTER_STATEMENT, NO_COMPUTER_WEIGHT, SKILL_RULES};
pub use scorer::{score_optional_skills, score_roster, score_skills, split_statements};
pub use tiers::{tier_for_score, TierRange, TIER_RANGES};
