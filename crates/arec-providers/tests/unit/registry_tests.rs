//! Tests for provider self-registration

use arec_application::ports::registry::{
    EmbeddingProviderConfig, RerankProviderConfig, VectorIndexProviderConfig,
    list_embedding_providers, list_rerank_providers, list_vector_index_providers,
    resolve_embedding_provider, resolve_rerank_provider, resolve_vector_index_provider,
};

#[test]
fn test_builtin_providers_are_registered() {
    let embedding: Vec<&str> = list_embedding_providers().iter().map(|p| p.0).collect();
    let index: Vec<&str> = list_vector_index_providers().iter().map(|p| p.0).collect();
    let rerank: Vec<&str> = list_rerank_providers().iter().map(|p| p.0).collect();

    assert!(embedding.contains(&"null"));
    assert!(embedding.contains(&"gemini"));
    assert!(index.contains(&"flat"));
    assert!(rerank.contains(&"null"));
    assert!(rerank.contains(&"gemini"));
}

#[test]
fn test_resolve_null_embedding_with_dimensions() {
    let provider = resolve_embedding_provider(&EmbeddingProviderConfig::new("null").with_dimensions(16))
        .expect("null provider should resolve");
    assert_eq!(provider.provider_name(), "null");
    assert_eq!(provider.dimensions(), 16);
}

#[test]
fn test_resolve_flat_index() {
    let provider = resolve_vector_index_provider(&VectorIndexProviderConfig::new("flat"))
        .expect("flat index should resolve");
    assert_eq!(provider.provider_name(), "flat");
    assert!(!provider.is_built());
}

#[test]
fn test_gemini_requires_api_key() {
    let Err(message) = resolve_embedding_provider(&EmbeddingProviderConfig::new("gemini")) else {
        panic!("gemini embedding without api key should fail");
    };
    assert!(message.contains("api_key"));

    let Err(message) = resolve_rerank_provider(&RerankProviderConfig::new("gemini")) else {
        panic!("gemini rerank without api key should fail");
    };
    assert!(message.contains("api_key"));
}

#[test]
fn test_resolve_gemini_rerank_with_key() {
    let provider = resolve_rerank_provider(
        &RerankProviderConfig::new("gemini")
            .with_api_key("test-key")
            .with_timeout_secs(5),
    )
    .expect("gemini rerank should resolve with a key");
    assert_eq!(provider.provider_name(), "gemini");
}
