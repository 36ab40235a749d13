//! Tests for the result cache

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use arec_application::ports::services::RecommendationServiceInterface;
use arec_domain::error::Result;
use arec_domain::{
    CatalogEntry, CategoryTag, Query, QueryLimits, RecommendationResult, RerankOutcome,
    ScoredCandidate,
};
use arec_infrastructure::cache::CachedRecommendationService;
use async_trait::async_trait;

/// Counts calls and answers with a fixed outcome
struct CountingService {
    calls: AtomicUsize,
    outcome: RerankOutcome,
}

impl CountingService {
    fn new(outcome: RerankOutcome) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            outcome,
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecommendationServiceInterface for CountingService {
    async fn recommend(&self, query: &Query) -> Result<RecommendationResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let entry = CatalogEntry::new(query.normalized_text(), "A", CategoryTag::Knowledge, vec![1.0]);
        Ok(RecommendationResult {
            candidates: vec![ScoredCandidate::new(Arc::new(entry), 0.9)],
            rerank: self.outcome,
            balanced: true,
        })
    }

    async fn recommend_text(
        &self,
        text: &str,
        top_k: Option<usize>,
    ) -> Result<RecommendationResult> {
        self.recommend(&Query::new(text, top_k)?).await
    }
}

fn cached(inner: Arc<CountingService>) -> CachedRecommendationService {
    CachedRecommendationService::new(inner, QueryLimits::default(), 100, Duration::from_secs(60))
}

#[tokio::test]
async fn test_repeated_query_is_served_from_cache() {
    let inner = CountingService::new(RerankOutcome::Applied);
    let service = cached(inner.clone());

    let first = service.recommend_text("Java Developer", Some(5)).await.expect("first");
    let second = service
        .recommend_text("  java   developer ", Some(5))
        .await
        .expect("second");

    assert_eq!(inner.calls(), 1);
    assert_eq!(first.ids(), second.ids());
    assert_eq!(service.entry_count().await, 1);
}

#[tokio::test]
async fn test_top_k_is_part_of_the_key() {
    let inner = CountingService::new(RerankOutcome::Applied);
    let service = cached(inner.clone());

    service.recommend_text("java", Some(5)).await.expect("first");
    service.recommend_text("java", Some(6)).await.expect("second");

    assert_eq!(inner.calls(), 2);
}

#[tokio::test]
async fn test_fallback_results_are_not_cached() {
    let inner = CountingService::new(RerankOutcome::TimedOut);
    let service = cached(inner.clone());

    service.recommend_text("java", None).await.expect("first");
    service.recommend_text("java", None).await.expect("second");

    assert_eq!(inner.calls(), 2);
    assert_eq!(service.entry_count().await, 0);
}

#[tokio::test]
async fn test_validation_happens_before_lookup() {
    let inner = CountingService::new(RerankOutcome::Applied);
    let service = cached(inner.clone());

    assert!(service.recommend_text("   ", None).await.is_err());
    assert_eq!(inner.calls(), 0);
}

#[tokio::test]
async fn test_clear_drops_entries() {
    let inner = CountingService::new(RerankOutcome::Disabled);
    let service = cached(inner.clone());

    service.recommend_text("java", None).await.expect("first");
    service.clear().await;
    service.recommend_text("java", None).await.expect("second");

    assert_eq!(inner.calls(), 2);
}
