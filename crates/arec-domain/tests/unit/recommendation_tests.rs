//! Unit tests for recommendation value objects

use std::sync::Arc;

use arec_domain::{
    CatalogEntry, CategoryTag, RecommendationItem, RecommendationResult, RerankOutcome,
    ScoredCandidate,
};

fn candidate(id: &str, tag: CategoryTag, similarity: f32) -> ScoredCandidate {
    ScoredCandidate::new(
        Arc::new(CatalogEntry::new(id, id.to_uppercase(), tag, vec![1.0])),
        similarity,
    )
}

#[test]
fn test_result_accessors() {
    let result = RecommendationResult {
        candidates: vec![
            candidate("a", CategoryTag::Knowledge, 0.9),
            candidate("b", CategoryTag::Personality, 0.5),
        ],
        rerank: RerankOutcome::Applied,
        balanced: true,
    };

    assert_eq!(result.len(), 2);
    assert!(!result.is_empty());
    assert_eq!(result.ids(), vec!["a", "b"]);
}

#[test]
fn test_item_serialization_shape() {
    let item = RecommendationItem::from(&candidate("a", CategoryTag::Hybrid, 0.25));
    let json = serde_json::to_value(&item).expect("serialize");

    assert_eq!(json["id"], "a");
    assert_eq!(json["name"], "A");
    assert_eq!(json["url"], "a");
    assert_eq!(json["category_tag"], "H");
    assert!(json.get("duration").is_none());
}

#[test]
fn test_rerank_outcome_fallback_classification() {
    assert!(RerankOutcome::TimedOut.is_fallback());
    assert!(RerankOutcome::ProviderFailed.is_fallback());
    assert!(RerankOutcome::Malformed.is_fallback());
    assert!(!RerankOutcome::Applied.is_fallback());
    assert!(!RerankOutcome::Skipped.is_fallback());
    assert!(!RerankOutcome::Disabled.is_fallback());
    assert_eq!(
        serde_json::to_string(&RerankOutcome::TimedOut).expect("serialize"),
        "\"timed_out\""
    );
}
