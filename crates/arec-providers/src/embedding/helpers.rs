//! Common helpers for API-backed providers

use std::time::Duration;

/// Common constructor patterns used by API providers
pub mod constructor {
    use std::time::Duration;

    /// Trim an API key
    pub fn validate_api_key(api_key: &str) -> String {
        api_key.trim().to_string()
    }

    /// Trim a URL, dropping a trailing slash
    pub fn validate_url(url: Option<String>) -> Option<String> {
        url.map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
    }

    /// Timeout from optional seconds, falling back to the default
    pub fn timeout_or_default(timeout_secs: Option<u64>) -> Duration {
        timeout_secs.map_or(super::DEFAULT_API_TIMEOUT, Duration::from_secs)
    }

    /// Get effective URL with fallback to default
    pub fn get_effective_url(provided_url: Option<&str>, default_url: &str) -> String {
        provided_url.map_or_else(|| default_url.to_string(), |url| url.trim().to_string())
    }

    /// Build a reqwest client with the given timeout
    pub fn http_client(timeout: Duration) -> Result<reqwest::Client, String> {
        reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {e}"))
    }
}

/// Default timeout for API requests
pub const DEFAULT_API_TIMEOUT: Duration =
    Duration::from_secs(crate::constants::HTTP_REQUEST_TIMEOUT_SECS);
