//! Error handling for Cohort.
//! One error enum per subsystem, `thiserror` only.

pub mod cohort_error;
pub mod config_error;
pub mod error_code;
pub mod roster_error;

pub use cohort_error::{CohortError, CohortResult};
pub use config_error::ConfigError;
pub use error_code::CohortErrorCode;
pub use roster_error::RosterError;
