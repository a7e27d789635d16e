//! Top-level Cohort configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{GroupingConfig, ObservabilityConfig};
use crate::constants::{CONFIG_FILENAME, ENV_PREFIX};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`COHORT_*`)
/// 3. Project config (`cohort.toml` in the given directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CohortConfig {
    pub grouping: GroupingConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub min_size: Option<usize>,
    pub max_size: Option<usize>,
    pub log_level: Option<String>,
}

impl CohortConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILENAME);
        if project_config_path.exists() {
            config = Self::from_toml_file(&project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Missing keys take their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &CohortConfig) -> Result<(), ConfigError> {
        config.grouping.validate()
    }

    /// Apply environment variable overrides.
    /// Pattern: `COHORT_MIN_SIZE`, `COHORT_MAX_SIZE`, `COHORT_LOG_LEVEL`.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut CohortConfig) {
        if let Ok(val) = std::env::var(format!("{ENV_PREFIX}MIN_SIZE")) {
            if let Ok(v) = val.parse::<usize>() {
                config.grouping.min_size = v;
            }
        }
        if let Ok(val) = std::env::var(format!("{ENV_PREFIX}MAX_SIZE")) {
            if let Ok(v) = val.parse::<usize>() {
                config.grouping.max_size = v;
            }
        }
        if let Ok(val) = std::env::var(format!("{ENV_PREFIX}LOG_LEVEL")) {
            if !val.trim().is_empty() {
                config.observability.log_level = val;
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(config: &mut CohortConfig, cli: &CliOverrides) {
        if let Some(v) = cli.min_size {
            config.grouping.min_size = v;
        }
        if let Some(v) = cli.max_size {
            config.grouping.max_size = v;
        }
        if let Some(ref v) = cli.log_level {
            config.observability.log_level = v.clone();
        }
    }
}
