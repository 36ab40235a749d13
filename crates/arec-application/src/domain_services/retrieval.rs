//! Candidate Retrieval
//!
//! Embeds the query and fetches an over-provisioned candidate set so later
//! stages have room to deduplicate, reorder and rebalance.

use std::sync::Arc;
use std::time::Duration;

use arec_domain::constants::{DEFAULT_EMBEDDING_TIMEOUT_SECS, DEFAULT_OVER_PROVISION_FACTOR};
use arec_domain::error::{Error, Result};
use arec_domain::ports::providers::EmbeddingProvider;
use arec_domain::value_objects::normalize_l2;
use arec_domain::{Query, ScoredCandidate};
use tracing::debug;

use super::catalog_index::CatalogIndex;

/// Embeds queries and searches the catalog index
pub struct CandidateRetriever {
    index: Arc<CatalogIndex>,
    embedding: Arc<dyn EmbeddingProvider>,
    embed_timeout: Duration,
    over_provision_factor: usize,
}

impl CandidateRetriever {
    /// Create a retriever with the default timeout and over-provisioning
    pub fn new(index: Arc<CatalogIndex>, embedding: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            index,
            embedding,
            embed_timeout: Duration::from_secs(DEFAULT_EMBEDDING_TIMEOUT_SECS),
            over_provision_factor: DEFAULT_OVER_PROVISION_FACTOR,
        }
    }

    /// Bound the embedding call
    pub fn with_embed_timeout(mut self, timeout: Duration) -> Self {
        self.embed_timeout = timeout;
        self
    }

    /// Set how many candidates to fetch per requested result
    pub fn with_over_provision_factor(mut self, factor: usize) -> Self {
        self.over_provision_factor = factor.max(1);
        self
    }

    /// Configured over-provisioning factor
    pub fn over_provision_factor(&self) -> usize {
        self.over_provision_factor
    }

    /// The shared catalog index
    pub fn index(&self) -> &Arc<CatalogIndex> {
        &self.index
    }

    /// Retrieve with the configured over-provisioning factor
    pub async fn retrieve(&self, query: &Query) -> Result<Vec<ScoredCandidate>> {
        self.retrieve_with_factor(query, self.over_provision_factor)
            .await
    }

    /// Embed `query` and fetch `top_k * factor` candidates, capped at catalog size
    ///
    /// Embedding failures, timeouts, zero vectors and vectors of the wrong
    /// dimension are all `EmbeddingService` errors.
    pub async fn retrieve_with_factor(
        &self,
        query: &Query,
        over_provision_factor: usize,
    ) -> Result<Vec<ScoredCandidate>> {
        let mut vector = self.embed_query(query.text()).await?;

        let expected = self.index.dimensions();
        if vector.len() != expected {
            return Err(Error::embedding_service(format!(
                "Query embedding has {} dimensions, index expects {expected}",
                vector.len()
            )));
        }
        if normalize_l2(&mut vector) == 0.0 {
            return Err(Error::embedding_service("Query embedding is a zero vector"));
        }

        let n = query
            .top_k()
            .saturating_mul(over_provision_factor.max(1))
            .min(self.index.len());
        let candidates = self.index.search(&vector, n).await?;
        debug!(
            top_k = query.top_k(),
            requested = n,
            retrieved = candidates.len(),
            "Candidates retrieved"
        );
        Ok(candidates)
    }

    async fn embed_query(&self, text: &str) -> Result<Vec<f32>> {
        match tokio::time::timeout(self.embed_timeout, self.embedding.embed(text)).await {
            Ok(Ok(embedding)) => Ok(embedding.vector),
            Ok(Err(err @ Error::EmbeddingService { .. })) => Err(err),
            Ok(Err(err)) => Err(Error::embedding_service_with_source(
                format!("{} failed to embed query", self.embedding.provider_name()),
                err,
            )),
            Err(_) => Err(Error::embedding_service(format!(
                "{} did not answer within {:?}",
                self.embedding.provider_name(),
                self.embed_timeout
            ))),
        }
    }
}
