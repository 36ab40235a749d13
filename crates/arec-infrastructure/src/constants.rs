//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "arec.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "arec";

/// Environment variable prefix for configuration (`AREC__SECTION__KEY`)
pub const CONFIG_ENV_PREFIX: &str = "AREC";

/// Separator between the prefix and nested configuration keys
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Environment variable consulted when a Gemini provider has no api_key
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

// ============================================================================
// CATALOG CONSTANTS
// ============================================================================

/// Default catalog file
pub const DEFAULT_CATALOG_PATH: &str = "catalog.json";

/// Catalog documents embedded per provider call
pub const CATALOG_EMBED_BATCH_SIZE: usize = 32;

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Default number of cached results
pub const CACHE_DEFAULT_CAPACITY: u64 = 1_000;

/// Default time-to-live of a cached result
pub const CACHE_DEFAULT_TTL_SECS: u64 = 3_600;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_ENV_VAR: &str = "AREC_LOG";

/// File name prefix of rolling log files
pub const LOG_FILE_PREFIX: &str = "arec";

// ============================================================================
// SERVER CONSTANTS
// ============================================================================

/// Default bind address of the HTTP server
pub const SERVER_DEFAULT_HOST: &str = "127.0.0.1";

/// Default HTTP port
pub const SERVER_DEFAULT_PORT: u16 = 8000;

// ============================================================================
// PREDICTION CONSTANTS
// ============================================================================

/// Column names recognized as the query column of a query file
pub const QUERY_COLUMN_NAMES: &[&str] = &["query", "text", "job_description", "jd", "description"];

/// Header of a predictions file
pub const PREDICTION_HEADERS: [&str; 2] = ["Query", "Assessment_url"];
