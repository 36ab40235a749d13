//! Tests for candidate retrieval

use std::sync::Arc;
use std::time::Duration;

use arec_domain::error::Error;
use arec_domain::{CategoryTag, Query};
use arec_providers::embedding::NullEmbeddingProvider;

use crate::test_utils::{
    FailingEmbedding, FixedEmbedding, at_angle, entry, ids, knowledge_heavy_catalog, retriever_for,
};

#[tokio::test]
async fn test_over_provisioning_is_capped_at_catalog_size() {
    let retriever = retriever_for(
        knowledge_heavy_catalog(),
        Arc::new(FixedEmbedding::new(vec![1.0, 0.0])),
    )
    .await;
    let query = Query::new("java", Some(2)).expect("query");

    let wide = retriever.retrieve_with_factor(&query, 5).await.expect("retrieve");
    assert_eq!(wide.len(), 6);

    let narrow = retriever.retrieve_with_factor(&query, 1).await.expect("retrieve");
    assert_eq!(ids(&narrow), vec!["k1", "k2"]);
}

#[tokio::test]
async fn test_query_vector_is_normalized() {
    let retriever = retriever_for(
        knowledge_heavy_catalog(),
        Arc::new(FixedEmbedding::new(vec![10.0, 0.0])),
    )
    .await;
    let query = Query::new("java", Some(1)).expect("query");

    let hits = retriever.retrieve(&query).await.expect("retrieve");
    assert!(hits[0].similarity <= 1.0 + 1e-6);
    assert!((hits[0].similarity - 0.1_f32.cos()).abs() < 1e-5);
}

#[tokio::test]
async fn test_provider_error_becomes_embedding_error() {
    let retriever = retriever_for(knowledge_heavy_catalog(), Arc::new(FailingEmbedding)).await;
    let query = Query::new("java", None).expect("query");

    let err = retriever.retrieve(&query).await.unwrap_err();
    assert!(matches!(err, Error::EmbeddingService { .. }));
}

#[tokio::test(start_paused = true)]
async fn test_embedding_timeout_is_an_embedding_error() {
    let embedding = FixedEmbedding::slow(vec![1.0, 0.0], Duration::from_secs(120));
    let retriever = retriever_for(knowledge_heavy_catalog(), Arc::new(embedding))
        .await
        .with_embed_timeout(Duration::from_secs(1));
    let query = Query::new("java", None).expect("query");

    let err = retriever.retrieve(&query).await.unwrap_err();
    assert!(matches!(err, Error::EmbeddingService { .. }));
    assert!(err.to_string().contains("did not answer"));
}

#[tokio::test]
async fn test_zero_vector_is_rejected() {
    let retriever = retriever_for(
        knowledge_heavy_catalog(),
        Arc::new(FixedEmbedding::new(vec![0.0, 0.0])),
    )
    .await;
    let query = Query::new("java", None).expect("query");

    assert!(matches!(
        retriever.retrieve(&query).await,
        Err(Error::EmbeddingService { .. })
    ));
}

#[tokio::test]
async fn test_wrong_dimension_is_rejected() {
    let retriever = retriever_for(
        knowledge_heavy_catalog(),
        Arc::new(NullEmbeddingProvider::with_dimensions(8)),
    )
    .await;
    let query = Query::new("java", None).expect("query");

    let err = retriever.retrieve(&query).await.unwrap_err();
    assert!(matches!(err, Error::EmbeddingService { .. }));
    assert!(err.to_string().contains("dimensions"));
}

#[tokio::test]
async fn test_retrieval_keeps_duplicates_for_the_deduplicator() {
    let entries = vec![
        entry("dup", CategoryTag::Knowledge, at_angle(0.0)),
        entry("dup", CategoryTag::Knowledge, at_angle(0.1)),
        entry("other", CategoryTag::Personality, at_angle(1.0)),
    ];
    let retriever = retriever_for(entries, Arc::new(FixedEmbedding::new(vec![1.0, 0.0]))).await;
    let query = Query::new("java", Some(3)).expect("query");

    let hits = retriever.retrieve(&query).await.expect("retrieve");
    assert_eq!(ids(&hits), vec!["dup", "dup", "other"]);
}
