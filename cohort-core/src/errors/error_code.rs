//! Stable error codes for collaborators that render or report failures.

/// Every error enum implements this to expose a machine-readable code.
pub trait CohortErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted report string: `[ERROR_CODE] message`.
    fn report_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONFIG_NOT_FOUND: &str = "CONFIG_NOT_FOUND";
pub const ROSTER_MISSING: &str = "ROSTER_MISSING";
pub const ROSTER_ERROR: &str = "ROSTER_ERROR";
