//! Roster loading errors.

use super::error_code::{self, CohortErrorCode};

/// Errors raised while turning caller-supplied data into a roster.
///
/// The grouping pipeline itself never fails; these only occur at the boundary.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("Roster is missing: {reason}")]
    MissingRoster { reason: String },

    #[error("Record {index} is malformed: {message}")]
    MalformedRecord { index: usize, message: String },

    #[error("Roster JSON could not be decoded: {0}")]
    Json(#[from] serde_json::Error),
}

impl CohortErrorCode for RosterError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingRoster { .. } => error_code::ROSTER_MISSING,
            Self::MalformedRecord { .. } | Self::Json(_) => error_code::ROSTER_ERROR,
        }
    }
}
