//! GroupingEngine: a validated cohort-size policy plus the pipeline entry points.

use cohort_core::config::{CohortConfig, GroupingConfig};
use cohort_core::errors::{CohortResult, ConfigError};
use cohort_core::models::Member;

use crate::outcome::GroupingOutcome;
use crate::pipeline;
use crate::roster;

/// Runs the grouping pipeline under a fixed policy.
///
/// Holds no state between runs; grouping the same roster twice yields
/// identical outcomes.
#[derive(Debug, Clone, Default)]
pub struct GroupingEngine {
    config: GroupingConfig,
}

impl GroupingEngine {
    /// Create an engine, rejecting an invalid policy.
    pub fn new(config: GroupingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn from_config(config: &CohortConfig) -> Result<Self, ConfigError> {
        Self::new(config.grouping.clone())
    }

    pub fn config(&self) -> &GroupingConfig {
        &self.config
    }

    /// Group a roster.
    pub fn group(&self, roster: &[Member]) -> GroupingOutcome {
        pipeline::run_pipeline(roster, &self.config)
    }

    /// Parse a JSON roster and group it.
    pub fn group_json(&self, json: &str) -> CohortResult<GroupingOutcome> {
        let members = roster::parse_roster(json)?;
        Ok(self.group(&members))
    }
}
