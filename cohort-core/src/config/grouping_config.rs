use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Cohort-size policy and the labels used by the fallback paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    /// Smallest cohort the splitter and rebalancer aim for.
    pub min_size: usize,
    /// Largest cohort before a bucket is split.
    pub max_size: usize,
    /// Label of the single group emitted when the pipeline yields nothing.
    pub default_group_label: String,
    /// Label of the bucket created in pass 3 when no bucket exists yet.
    pub fallback_bucket_label: String,
    /// Label used when no member states any preference at all.
    pub sentinel_preference_label: String,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            min_size: defaults::DEFAULT_MIN_GROUP_SIZE,
            max_size: defaults::DEFAULT_MAX_GROUP_SIZE,
            default_group_label: defaults::DEFAULT_GROUP_LABEL.to_string(),
            fallback_bucket_label: defaults::DEFAULT_FALLBACK_BUCKET_LABEL.to_string(),
            sentinel_preference_label: defaults::DEFAULT_SENTINEL_PREFERENCE_LABEL.to_string(),
        }
    }
}

impl GroupingConfig {
    /// Policy with the given bounds and default labels.
    pub fn with_bounds(min_size: usize, max_size: usize) -> Self {
        Self {
            min_size,
            max_size,
            ..Self::default()
        }
    }

    /// Check the size bounds and labels.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "grouping.min_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.max_size < self.min_size {
            return Err(ConfigError::ValidationFailed {
                field: "grouping.max_size".to_string(),
                message: format!("must be at least min_size ({})", self.min_size),
            });
        }
        for (field, value) in [
            ("grouping.default_group_label", &self.default_group_label),
            ("grouping.fallback_bucket_label", &self.fallback_bucket_label),
            (
                "grouping.sentinel_preference_label",
                &self.sentinel_preference_label,
            ),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
