//! Tests for the offline rerank provider

use arec_domain::RerankCandidate;
use arec_providers::RerankProvider;
use arec_providers::rerank::NullRerankProvider;

#[tokio::test]
async fn test_null_rerank_keeps_submitted_order() {
    let candidates: Vec<RerankCandidate> = ["c", "a", "b"]
        .iter()
        .map(|id| RerankCandidate {
            id: (*id).to_string(),
            name: id.to_uppercase(),
            description: String::new(),
            skills: String::new(),
        })
        .collect();

    let ids = NullRerankProvider::new()
        .rank("anything", &candidates)
        .await
        .expect("rank");
    assert_eq!(ids, vec!["c", "a", "b"]);
}
