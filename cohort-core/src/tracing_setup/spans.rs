//! Span definitions per operation: scoring and grouping.

/// Create a scoring span.
#[macro_export]
macro_rules! scoring_span {
    ($roster_size:expr) => {
        tracing::info_span!("cohort.scoring", roster_size = $roster_size)
    };
}

/// Create a grouping span.
#[macro_export]
macro_rules! grouping_span {
    ($roster_size:expr, $min:expr, $max:expr) => {
        tracing::info_span!(
            "cohort.grouping",
            roster_size = $roster_size,
            min_size = $min,
            max_size = $max
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SCORING: &str = "cohort.scoring";
    pub const GROUPING: &str = "cohort.grouping";
}
