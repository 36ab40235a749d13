//! Provider Constants
//!
//! Constants specific to provider implementations. Engine defaults live in
//! `arec-domain::constants`.

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Null embedding provider dimension
pub const EMBEDDING_DIMENSION_NULL: usize = 384;

/// Gemini embedding dimension
pub const EMBEDDING_DIMENSION_GEMINI: usize = 768;

/// Default Gemini embedding model
pub const GEMINI_EMBEDDING_MODEL: &str = "text-embedding-004";

// ============================================================================
// RERANK PROVIDER CONSTANTS
// ============================================================================

/// Default Gemini model used for reordering
pub const GEMINI_RERANK_MODEL: &str = "gemini-1.5-flash";

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// Google Generative Language API base URL
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// HTTP request timeout in seconds
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP request timeout error message prefix
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";
