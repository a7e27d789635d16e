// Single source of truth for all default values.

// --- Grouping ---
pub const DEFAULT_MIN_GROUP_SIZE: usize = 4;
pub const DEFAULT_MAX_GROUP_SIZE: usize = 6;
pub const DEFAULT_GROUP_LABEL: &str = "all-members";
pub const DEFAULT_FALLBACK_BUCKET_LABEL: &str = "unassigned";
pub const DEFAULT_SENTINEL_PREFERENCE_LABEL: &str = "unspecified";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
