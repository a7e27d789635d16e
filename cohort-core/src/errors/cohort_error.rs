//! Top-level error aggregating subsystem errors.

use super::error_code::CohortErrorCode;
use super::{ConfigError, RosterError};

/// Any error surfaced by the Cohort crates.
#[derive(Debug, thiserror::Error)]
pub enum CohortError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),
}

impl CohortErrorCode for CohortError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Roster(e) => e.error_code(),
        }
    }
}

pub type CohortResult<T> = Result<T, CohortError>;
