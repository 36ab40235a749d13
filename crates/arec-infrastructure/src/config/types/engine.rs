//! Recommendation pipeline tuning

use std::time::Duration;

use arec_application::domain_services::BalancePolicy;
use arec_domain::QueryLimits;
use arec_domain::constants::{
    DEFAULT_EMBEDDING_TIMEOUT_SECS, DEFAULT_OVER_PROVISION_FACTOR, DEFAULT_RERANK_SUBSET_SIZE,
    DEFAULT_RERANK_TIMEOUT_SECS, DEFAULT_TOP_K, MAX_QUERY_LENGTH, MAX_TOP_K,
};
use serde::{Deserialize, Serialize};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Result size when the caller gives none
    pub default_top_k: usize,
    /// Largest result size; larger requests are clamped
    pub max_top_k: usize,
    /// Maximum query length in characters
    pub max_query_length: usize,
    /// Candidates retrieved per requested result
    pub over_provision_factor: usize,
    pub embed_timeout_secs: u64,
    /// Leading candidates handed to the reranker
    pub rerank_subset_size: usize,
    pub rerank_timeout_secs: u64,
    pub balance: BalancePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_top_k: DEFAULT_TOP_K,
            max_top_k: MAX_TOP_K,
            max_query_length: MAX_QUERY_LENGTH,
            over_provision_factor: DEFAULT_OVER_PROVISION_FACTOR,
            embed_timeout_secs: DEFAULT_EMBEDDING_TIMEOUT_SECS,
            rerank_subset_size: DEFAULT_RERANK_SUBSET_SIZE,
            rerank_timeout_secs: DEFAULT_RERANK_TIMEOUT_SECS,
            balance: BalancePolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Query validation bounds
    pub fn limits(&self) -> QueryLimits {
        QueryLimits {
            max_length: self.max_query_length,
            default_top_k: self.default_top_k,
            max_top_k: self.max_top_k,
        }
    }

    pub fn embed_timeout(&self) -> Duration {
        Duration::from_secs(self.embed_timeout_secs)
    }

    pub fn rerank_timeout(&self) -> Duration {
        Duration::from_secs(self.rerank_timeout_secs)
    }
}
