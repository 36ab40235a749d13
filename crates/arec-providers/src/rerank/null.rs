//! Null rerank provider
//!
//! Returns candidate ids in the order they were submitted. Keeps the pipeline
//! fully offline while still exercising the reordering path.

use async_trait::async_trait;

use arec_domain::RerankCandidate;
use arec_domain::error::Result;
use arec_domain::ports::providers::RerankProvider;

/// Order-preserving rerank provider
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRerankProvider;

impl NullRerankProvider {
    /// Create a new null rerank provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RerankProvider for NullRerankProvider {
    async fn rank(&self, _query: &str, candidates: &[RerankCandidate]) -> Result<Vec<String>> {
        Ok(candidates.iter().map(|c| c.id.clone()).collect())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use arec_application::ports::registry::{
    RERANK_PROVIDERS, RerankProviderConfig, RerankProviderEntry,
};

#[linkme::distributed_slice(RERANK_PROVIDERS)]
static NULL_PROVIDER: RerankProviderEntry = RerankProviderEntry {
    name: "null",
    description: "Offline provider that keeps the similarity order",
    factory: |_config: &RerankProviderConfig| Ok(std::sync::Arc::new(NullRerankProvider::new())),
};
