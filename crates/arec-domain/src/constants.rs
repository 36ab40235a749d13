//! Domain layer constants
//!
//! Defaults and bounds of the recommendation pipeline. Infrastructure-level
//! constants (config file names, env prefixes) live in `arec-infrastructure`.

// ============================================================================
// QUERY CONSTANTS
// ============================================================================

/// Number of results returned when the caller does not ask for a count
pub const DEFAULT_TOP_K: usize = 10;

/// Smallest accepted result count
pub const MIN_TOP_K: usize = 1;

/// Largest accepted result count
pub const MAX_TOP_K: usize = 20;

/// Maximum query length in characters (after trimming)
pub const MAX_QUERY_LENGTH: usize = 5000;

// ============================================================================
// RETRIEVAL CONSTANTS
// ============================================================================

/// Candidate pool multiplier applied to `top_k` before deduplication and balancing
pub const DEFAULT_OVER_PROVISION_FACTOR: usize = 5;

/// Timeout for a single query embedding call, in seconds
pub const DEFAULT_EMBEDDING_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// RERANK CONSTANTS
// ============================================================================

/// Number of leading candidates submitted to the reordering provider
pub const DEFAULT_RERANK_SUBSET_SIZE: usize = 20;

/// Hard deadline for the reordering call, in seconds
pub const DEFAULT_RERANK_TIMEOUT_SECS: u64 = 30;

/// Description characters sent per candidate in a rerank request
pub const RERANK_DESCRIPTION_MAX_CHARS: usize = 200;

/// Skills characters sent per candidate in a rerank request
pub const RERANK_SKILLS_MAX_CHARS: usize = 100;

/// Suffix appended to truncated rerank fields
pub const TRUNCATION_SUFFIX: &str = "...";

// ============================================================================
// BALANCING CONSTANTS
// ============================================================================

/// Minimum entries of each primary category in a balanced result
pub const DEFAULT_MIN_PER_CATEGORY: usize = 2;
