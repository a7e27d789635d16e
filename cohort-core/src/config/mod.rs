//! Configuration system for Cohort.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod cohort_config;
pub mod defaults;
pub mod grouping_config;
pub mod observability_config;

pub use cohort_config::{CliOverrides, CohortConfig};
pub use grouping_config::GroupingConfig;
pub use observability_config::ObservabilityConfig;
