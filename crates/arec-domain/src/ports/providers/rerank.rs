use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::RerankCandidate;

/// Relevance Reordering Interface
///
/// An external, possibly slow text-reasoning service that orders a short
/// candidate list by relevance to the query. The answer is a list of
/// candidate ids; validating that it is a permutation of the input is the
/// caller's job.
#[async_trait]
pub trait RerankProvider: Send + Sync {
    /// Return candidate ids in relevance order
    async fn rank(&self, query: &str, candidates: &[RerankCandidate]) -> Result<Vec<String>>;

    /// Provider identifier (e.g., "gemini", "null")
    fn provider_name(&self) -> &str;
}
