/// Name of the project-level config file looked up by `CohortConfig::load`.
pub const CONFIG_FILENAME: &str = "cohort.toml";

/// Environment variable that controls the tracing filter.
pub const LOG_ENV_VAR: &str = "COHORT_LOG";

/// Prefix for environment variable overrides (`COHORT_MIN_SIZE`, ...).
pub const ENV_PREFIX: &str = "COHORT_";
