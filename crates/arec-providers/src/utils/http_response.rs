//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from API providers.

use arec_domain::error::{Error, Result};
use reqwest::Response;

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `provider_name` - Name of the provider for error messages
    /// * `make_error` - Builds the error for the calling port
    ///   (e.g. `Error::embedding_service`, `Error::rerank_service`)
    pub async fn check_and_parse(
        response: Response,
        provider_name: &str,
        make_error: fn(String) -> Error,
    ) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();

            let context = match code {
                401 | 403 => "authentication failed".to_string(),
                429 => "rate limit exceeded".to_string(),
                500..=599 => format!("server error ({code})"),
                _ => format!("request failed ({code})"),
            };
            return Err(make_error(format!("{provider_name} {context}: {error_text}")));
        }

        response.json().await.map_err(|e| {
            make_error(format!("{provider_name} response parse failed: {e}"))
        })
    }

    /// Map a transport error, calling out timeouts
    pub fn request_error(
        err: &reqwest::Error,
        timeout: std::time::Duration,
        make_error: fn(String) -> Error,
    ) -> Error {
        if err.is_timeout() {
            make_error(format!(
                "{} {timeout:?}",
                crate::constants::ERROR_MSG_REQUEST_TIMEOUT
            ))
        } else {
            make_error(format!("HTTP request failed: {err}"))
        }
    }
}
