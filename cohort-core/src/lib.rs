//! # cohort-core
//!
//! Foundation crate for the Cohort grouping engine.
//! Defines the member, skill-tier and group models, errors, config,
//! tracing setup and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::{CohortConfig, GroupingConfig};
pub use errors::{CohortError, CohortResult};
pub use models::{CompositeTag, Group, Member, ScoredMember, SkillProfile, SkillTier, TierCounts};
