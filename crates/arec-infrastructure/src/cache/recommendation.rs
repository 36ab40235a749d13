//! Cached recommendation service

use std::sync::Arc;
use std::time::Duration;

use arec_application::ports::services::RecommendationServiceInterface;
use arec_domain::error::Result;
use arec_domain::{Query, QueryLimits, RecommendationResult};
use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use crate::config::CacheConfig;

/// Normalized query text and result size
pub type CacheKey = (String, usize);

/// Caches successful results of an inner service
///
/// Results produced through a reordering fallback are returned but never
/// stored, so a recovered provider is consulted again on the next request.
pub struct CachedRecommendationService {
    inner: Arc<dyn RecommendationServiceInterface>,
    cache: Cache<CacheKey, RecommendationResult>,
    limits: QueryLimits,
}

impl CachedRecommendationService {
    /// Cache up to `capacity` results for `ttl` each
    pub fn new(
        inner: Arc<dyn RecommendationServiceInterface>,
        limits: QueryLimits,
        capacity: u64,
        ttl: Duration,
    ) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(ttl)
            .build();
        Self {
            inner,
            cache,
            limits,
        }
    }

    /// Build from configuration
    pub fn from_config(
        inner: Arc<dyn RecommendationServiceInterface>,
        limits: QueryLimits,
        config: &CacheConfig,
    ) -> Self {
        Self::new(inner, limits, config.capacity, config.ttl())
    }

    /// Number of cached results
    pub async fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }

    /// Drop every cached result
    pub async fn clear(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
    }

    fn key(query: &Query) -> CacheKey {
        (query.normalized_text(), query.top_k())
    }
}

#[async_trait]
impl RecommendationServiceInterface for CachedRecommendationService {
    async fn recommend(&self, query: &Query) -> Result<RecommendationResult> {
        let key = Self::key(query);
        if let Some(hit) = self.cache.get(&key).await {
            debug!(top_k = key.1, "Recommendation cache hit");
            return Ok(hit);
        }

        let result = self.inner.recommend(query).await?;
        if result.rerank.is_fallback() {
            debug!(rerank = %result.rerank, "Fallback result not cached");
        } else {
            self.cache.insert(key, result.clone()).await;
        }
        Ok(result)
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
