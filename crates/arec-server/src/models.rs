//! Request and response bodies

use arec_domain::error::Error;
use arec_domain::{RecommendationItem, RecommendationResult, RerankOutcome};
use rocket::http::Status;
use serde::{Deserialize, Serialize};

/// Body of `POST /recommend`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecommendRequest {
    pub query: String,
    /// Clamped to the configured bounds; negative values count as the minimum
    #[serde(default)]
    pub top_k: Option<i64>,
}

impl RecommendRequest {
    /// `top_k` as an unsigned count, negatives mapped to zero
    pub fn top_k(&self) -> Option<usize> {
        self.top_k.map(|k| usize::try_from(k).unwrap_or(0))
    }
}

/// Ranked assessments for one query
#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse {
    pub query: String,
    pub rerank: RerankOutcome,
    pub balanced: bool,
    pub recommendations: Vec<RecommendationItem>,
}

impl RecommendResponse {
    pub fn new(query: String, result: &RecommendationResult) -> Self {
        Self {
            query,
            rerank: result.rerank,
            balanced: result.balanced,
            recommendations: result.to_items(),
        }
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Entries in the catalog index
    pub catalog_size: usize,
    pub dimensions: usize,
    pub index_provider: String,
}

/// Body of `GET /`
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<&'static str>,
}

/// Error body returned by every failing route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Stable code for programmatic handling
    pub code: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }

    /// Status and body for an engine error
    ///
    /// Rejected input is the caller's fault (400); an unavailable embedding
    /// service is 503; everything else is 500.
    pub fn from_error(err: &Error) -> (Status, Self) {
        match err {
            Error::Validation { message } => {
                (Status::BadRequest, Self::new(message.clone(), "VALIDATION"))
            }
            Error::RecommendationFailed { .. } => (
                Status::ServiceUnavailable,
                Self::new(err.to_string(), "UPSTREAM_UNAVAILABLE"),
            ),
            _ => (
                Status::InternalServerError,
                Self::new(err.to_string(), "INTERNAL_ERROR"),
            ),
        }
    }
}
