//! End-to-end tests for the recommendation pipeline

use std::sync::Arc;
use std::time::Duration;

use arec_application::domain_services::{
    BalanceMode, BalancePolicy, DeadlineRerank, ExternalRerank, Reranker,
};
use arec_application::ports::services::RecommendationServiceInterface;
use arec_application::use_cases::RecommendationService;
use arec_domain::error::Error;
use arec_domain::ports::providers::EmbeddingProvider;
use arec_domain::{CatalogEntry, CategoryTag, QueryLimits, RerankOutcome};

use crate::test_utils::{
    FailingEmbedding, FixedEmbedding, RerankScript, ScriptedRerank, at_angle, entry,
    knowledge_heavy_catalog, retriever_for,
};

async fn service_with(
    entries: Vec<CatalogEntry>,
    embedding: Arc<dyn EmbeddingProvider>,
    reranker: Reranker,
) -> RecommendationService {
    RecommendationService::new(retriever_for(entries, embedding).await, reranker)
}

async fn offline_service() -> (RecommendationService, Arc<FixedEmbedding>) {
    let embedding = Arc::new(FixedEmbedding::new(vec![1.0, 0.0]));
    let service = service_with(
        knowledge_heavy_catalog(),
        embedding.clone(),
        Reranker::disabled(),
    )
    .await;
    (service, embedding)
}

fn scripted_reranker(script: RerankScript) -> Reranker {
    Reranker::new(DeadlineRerank::new(
        Arc::new(ExternalRerank::new(Arc::new(ScriptedRerank::new(script)))),
        Duration::from_millis(100),
    ))
}

#[tokio::test]
async fn test_mixed_query_is_balanced() {
    let (service, _) = offline_service().await;

    let result = service
        .recommend_text("Java developer who collaborates with the team", Some(4))
        .await
        .expect("recommendation");

    assert!(result.balanced);
    assert_eq!(result.ids(), vec!["k1", "k2", "p1", "p2"]);
    let personality = result
        .iter()
        .filter(|c| c.category_tag() == CategoryTag::Personality)
        .count();
    assert!(personality >= 2);
}

#[tokio::test]
async fn test_mixed_query_at_six_keeps_every_personality_entry() {
    let (service, _) = offline_service().await;

    let result = service
        .recommend_text("Java developer who collaborates with the team", Some(6))
        .await
        .expect("recommendation");

    assert!(result.balanced);
    assert_eq!(result.ids(), vec!["k1", "k2", "k3", "p1", "p2", "p3"]);
    let personality = result
        .iter()
        .filter(|c| c.category_tag() == CategoryTag::Personality)
        .count();
    assert!(personality >= 2);
}

#[tokio::test]
async fn test_single_category_query_is_not_balanced() {
    let (service, _) = offline_service().await;

    let result = service
        .recommend_text("only technical assessments please", Some(4))
        .await
        .expect("recommendation");

    assert!(!result.balanced);
    assert_eq!(result.ids(), vec!["k1", "k2", "k3", "p1"]);
}

#[tokio::test]
async fn test_blank_query_never_reaches_the_embedder() {
    let (service, embedding) = offline_service().await;

    let err = service.recommend_text("   ", Some(5)).await.unwrap_err();

    assert!(matches!(err, Error::Validation { .. }));
    assert_eq!(embedding.calls(), 0);
}

#[tokio::test]
async fn test_over_length_query_is_rejected() {
    let (service, embedding) = offline_service().await;
    let service = service.with_limits(QueryLimits {
        max_length: 10,
        ..QueryLimits::default()
    });

    let err = service
        .recommend_text("a query that is far too long", None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation { .. }));
    assert_eq!(embedding.calls(), 0);
}

#[tokio::test]
async fn test_top_k_is_clamped_and_bounded_by_catalog() {
    let (service, _) = offline_service().await;

    let result = service
        .recommend_text("java developer", Some(500))
        .await
        .expect("recommendation");

    assert_eq!(result.len(), 6);
}

#[tokio::test]
async fn test_duplicate_ids_keep_first_occurrence() {
    let entries = vec![
        CatalogEntry::new("dup", "First", CategoryTag::Knowledge, at_angle(0.0)),
        CatalogEntry::new("dup", "Second", CategoryTag::Knowledge, at_angle(0.05)),
        entry("other", CategoryTag::Knowledge, at_angle(0.5)),
    ];
    let service = service_with(
        entries,
        Arc::new(FixedEmbedding::new(vec![1.0, 0.0])),
        Reranker::disabled(),
    )
    .await
    .with_balance_policy(BalancePolicy::with_mode(BalanceMode::Never));

    let result = service
        .recommend_text("anything", Some(3))
        .await
        .expect("recommendation");

    assert_eq!(result.ids(), vec!["dup", "other"]);
    assert_eq!(result.candidates[0].entry.name, "First");
}

#[tokio::test]
async fn test_embedding_failure_fails_the_request() {
    let service = service_with(
        knowledge_heavy_catalog(),
        Arc::new(FailingEmbedding),
        Reranker::disabled(),
    )
    .await;

    let err = service.recommend_text("java", None).await.unwrap_err();

    match err {
        Error::RecommendationFailed { source } => {
            assert!(matches!(*source, Error::EmbeddingService { .. }));
        }
        other => panic!("expected RecommendationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rerank_failure_matches_similarity_order() {
    let never = BalancePolicy::with_mode(BalanceMode::Never);
    let baseline = service_with(
        knowledge_heavy_catalog(),
        Arc::new(FixedEmbedding::new(vec![1.0, 0.0])),
        Reranker::disabled(),
    )
    .await
    .with_balance_policy(never.clone())
    .recommend_text("java", Some(5))
    .await
    .expect("baseline");

    for (script, expected) in [
        (RerankScript::Fail, RerankOutcome::ProviderFailed),
        (RerankScript::DropOne, RerankOutcome::Malformed),
    ] {
        let result = service_with(
            knowledge_heavy_catalog(),
            Arc::new(FixedEmbedding::new(vec![1.0, 0.0])),
            scripted_reranker(script),
        )
        .await
        .with_balance_policy(never.clone())
        .recommend_text("java", Some(5))
        .await
        .expect("fallback never fails the request");

        assert_eq!(result.rerank, expected);
        assert!(result.rerank.is_fallback());
        assert_eq!(result.ids(), baseline.ids());
    }
    assert_eq!(baseline.rerank, RerankOutcome::Disabled);
}

#[tokio::test(start_paused = true)]
async fn test_rerank_timeout_matches_similarity_order() {
    let result = service_with(
        knowledge_heavy_catalog(),
        Arc::new(FixedEmbedding::new(vec![1.0, 0.0])),
        scripted_reranker(RerankScript::Slow(Duration::from_secs(30))),
    )
    .await
    .with_balance_policy(BalancePolicy::with_mode(BalanceMode::Never))
    .recommend_text("java", Some(3))
    .await
    .expect("timeout never fails the request");

    assert_eq!(result.rerank, RerankOutcome::TimedOut);
    assert_eq!(result.ids(), vec!["k1", "k2", "k3"]);
}

#[tokio::test]
async fn test_applied_rerank_reorders_before_truncation() {
    let result = service_with(
        knowledge_heavy_catalog(),
        Arc::new(FixedEmbedding::new(vec![1.0, 0.0])),
        scripted_reranker(RerankScript::Reverse),
    )
    .await
    .with_balance_policy(BalancePolicy::with_mode(BalanceMode::Never))
    .recommend_text("java", Some(2))
    .await
    .expect("recommendation");

    assert_eq!(result.rerank, RerankOutcome::Applied);
    assert_eq!(result.ids(), vec!["p3", "p2"]);
}

#[tokio::test]
async fn test_single_entry_catalog_skips_rerank() {
    let result = service_with(
        vec![entry("solo", CategoryTag::Knowledge, at_angle(0.0))],
        Arc::new(FixedEmbedding::new(vec![1.0, 0.0])),
        scripted_reranker(RerankScript::Reverse),
    )
    .await
    .recommend_text("java", None)
    .await
    .expect("recommendation");

    assert_eq!(result.rerank, RerankOutcome::Skipped);
    assert_eq!(result.ids(), vec!["solo"]);
}

#[tokio::test]
async fn test_items_carry_entry_metadata() {
    let (service, _) = offline_service().await;

    let result = service
        .recommend_text("java", Some(1))
        .await
        .expect("recommendation");
    let items = result.to_items();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "k1");
    assert_eq!(items[0].name, "K1");
    assert_eq!(items[0].url, "k1");
    assert_eq!(items[0].category_tag, CategoryTag::Knowledge);
}
