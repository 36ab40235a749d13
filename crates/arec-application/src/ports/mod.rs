//! Application Port Interfaces
//!
//! ## Organization
//!
//! - **registry/** - Auto-registration system for plugin providers
//! - **services.rs** - Application service interfaces

/// Provider registry for dynamic provider discovery
pub mod registry;
/// Application service interfaces
pub mod services;

pub use registry::{
    EmbeddingProviderConfig, EmbeddingProviderEntry, RerankProviderConfig, RerankProviderEntry,
    VectorIndexProviderConfig, VectorIndexProviderEntry, list_embedding_providers,
    list_rerank_providers, list_vector_index_providers, resolve_embedding_provider,
    resolve_rerank_provider, resolve_vector_index_provider,
};
pub use services::RecommendationServiceInterface;
