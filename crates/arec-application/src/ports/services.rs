//! Application Service Port Interfaces

use arec_domain::error::Result;
use arec_domain::{Query, RecommendationResult};
use async_trait::async_trait;

/// Recommendation Service Interface
///
/// The single operation exposed to transports: turn a query into a ranked,
/// deduplicated, category-balanced result.
#[async_trait]
pub trait RecommendationServiceInterface: Send + Sync {
    /// Recommend for an already validated query
    async fn recommend(&self, query: &Query) -> Result<RecommendationResult>;

    /// Validate raw caller input, then recommend
    async fn recommend_text(&self, text: &str, top_k: Option<usize>)
    -> Result<RecommendationResult>;
}
