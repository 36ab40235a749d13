//! Recommendation Service Use Case
//!
//! Orchestrates the pipeline for one request:
//! validate → retrieve → dedupe → rerank → balance → truncate.
//! Retrieval failures end the request; reordering failures never do.

use std::time::Instant;

use arec_domain::error::{Error, Result};
use arec_domain::{Query, QueryLimits, RecommendationResult};
use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::domain_services::balance::{BalancePolicy, balance};
use crate::domain_services::dedup::dedupe;
use crate::domain_services::rerank::Reranker;
use crate::domain_services::retrieval::CandidateRetriever;
use crate::ports::services::RecommendationServiceInterface;

/// Recommendation service implementation
pub struct RecommendationService {
    retriever: CandidateRetriever,
    reranker: Reranker,
    balance: BalancePolicy,
    limits: QueryLimits,
}

impl RecommendationService {
    /// Create a service with default balancing and query limits
    pub fn new(retriever: CandidateRetriever, reranker: Reranker) -> Self {
        Self {
            retriever,
            reranker,
            balance: BalancePolicy::default(),
            limits: QueryLimits::default(),
        }
    }

    /// Replace the balancing policy
    pub fn with_balance_policy(mut self, policy: BalancePolicy) -> Self {
        self.balance = policy;
        self
    }

    /// Replace the query limits
    pub fn with_limits(mut self, limits: QueryLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Query limits applied by `recommend_text`
    pub fn limits(&self) -> &QueryLimits {
        &self.limits
    }

    /// The balancing policy in use
    pub fn balance_policy(&self) -> &BalancePolicy {
        &self.balance
    }

    async fn run(&self, query: &Query) -> Result<RecommendationResult> {
        let top_k = query.top_k();

        let candidates = self
            .retriever
            .retrieve(query)
            .await
            .map_err(Error::recommendation_failed)?;
        let retrieved = candidates.len();

        let candidates = dedupe(candidates);
        debug!(retrieved, unique = candidates.len(), "Candidates deduplicated");

        let reranked = self.reranker.rerank(query.text(), candidates).await;

        let balanced = self.balance.applies_to(query.text());
        let mut candidates = if balanced {
            balance(&reranked.candidates, top_k, self.balance.min_per_category)
        } else {
            reranked.candidates
        };
        candidates.truncate(top_k);

        Ok(RecommendationResult {
            candidates,
            rerank: reranked.outcome,
            balanced,
        })
    }
}

#[async_trait]
impl RecommendationServiceInterface for RecommendationService {
    async fn recommend(&self, query: &Query) -> Result<RecommendationResult> {
        let started = Instant::now();
        match self.run(query).await {
            Ok(result) => {
                info!(
                    top_k = query.top_k(),
                    results = result.len(),
                    rerank = %result.rerank,
                    balanced = result.balanced,
                    elapsed_ms = started.elapsed().as_millis(),
                    "Recommendation completed"
                );
                Ok(result)
            }
            Err(err) => {
                error!(error = %err, "Recommendation failed");
                Err(err)
            }
        }
    }

    async fn recommend_text(
        &self,
        text: &str,
        top_k: Option<usize>,
    ) -> Result<RecommendationResult> {
        let query = Query::with_limits(text, top_k, &self.limits)?;
        self.recommend(&query).await
    }
}
