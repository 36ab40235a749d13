//! Provider resolution
//!
//! Maps configuration sections onto registry configs and resolves them by
//! name from the linkme registries.

use std::sync::Arc;

use arec_application::ports::registry::{
    EmbeddingProviderConfig, RerankProviderConfig, VectorIndexProviderConfig,
    list_embedding_providers, list_rerank_providers, list_vector_index_providers,
    resolve_embedding_provider, resolve_rerank_provider, resolve_vector_index_provider,
};
use arec_domain::error::{Error, Result};
use arec_domain::ports::providers::{EmbeddingProvider, RerankProvider, VectorIndexProvider};

use crate::config::{AppConfig, EmbeddingConfig, RerankConfig, VectorIndexConfig};

/// Resolves the configured providers
pub struct ProviderResolver {
    config: Arc<AppConfig>,
}

impl ProviderResolver {
    /// Create a resolver over `config`
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// The configured embedding provider
    pub fn embedding(&self) -> Result<Arc<dyn EmbeddingProvider>> {
        let section = &self.config.providers.embedding;
        resolve_embedding_provider(&embedding_config_to_registry(section))
            .map_err(|message| resolution_error("embedding", &section.provider, message))
    }

    /// The configured vector index, expecting `dimensions`-long vectors
    pub fn vector_index(&self, dimensions: usize) -> Result<Arc<dyn VectorIndexProvider>> {
        let section = &self.config.providers.vector_index;
        resolve_vector_index_provider(&vector_index_config_to_registry(section, dimensions))
            .map_err(|message| resolution_error("vector_index", &section.provider, message))
    }

    /// The configured rerank provider, or `None` when reordering is disabled
    pub fn rerank(&self) -> Result<Option<Arc<dyn RerankProvider>>> {
        let section = &self.config.providers.rerank;
        if !section.enabled {
            return Ok(None);
        }
        resolve_rerank_provider(&rerank_config_to_registry(section))
            .map(Some)
            .map_err(|message| resolution_error("rerank", &section.provider, message))
    }

    /// Every registered provider as (kind, name, description)
    pub fn list_available() -> Vec<(&'static str, &'static str, &'static str)> {
        let tagged = |kind: &'static str, providers: Vec<(&'static str, &'static str)>| {
            providers
                .into_iter()
                .map(move |(name, description)| (kind, name, description))
        };
        tagged("embedding", list_embedding_providers())
            .chain(tagged("vector_index", list_vector_index_providers()))
            .chain(tagged("rerank", list_rerank_providers()))
            .collect()
    }
}

fn resolution_error(kind: &str, name: &str, message: String) -> Error {
    Error::config(format!("Cannot create {kind} provider '{name}': {message}"))
}

fn embedding_config_to_registry(config: &EmbeddingConfig) -> EmbeddingProviderConfig {
    let mut registry = EmbeddingProviderConfig::new(&config.provider);
    if let Some(model) = &config.model {
        registry = registry.with_model(model);
    }
    if let Some(api_key) = &config.api_key {
        registry = registry.with_api_key(api_key);
    }
    if let Some(base_url) = &config.base_url {
        registry = registry.with_base_url(base_url);
    }
    if let Some(dimensions) = config.dimensions {
        registry = registry.with_dimensions(dimensions);
    }
    if let Some(timeout_secs) = config.timeout_secs {
        registry = registry.with_timeout_secs(timeout_secs);
    }
    for (key, value) in &config.extra {
        registry = registry.with_extra(key, value);
    }
    registry
}

fn vector_index_config_to_registry(
    config: &VectorIndexConfig,
    dimensions: usize,
) -> VectorIndexProviderConfig {
    let mut registry = VectorIndexProviderConfig::new(&config.provider).with_dimensions(dimensions);
    for (key, value) in &config.extra {
        registry = registry.with_extra(key, value);
    }
    registry
}

fn rerank_config_to_registry(config: &RerankConfig) -> RerankProviderConfig {
    let mut registry = RerankProviderConfig::new(&config.provider);
    if let Some(model) = &config.model {
        registry = registry.with_model(model);
    }
    if let Some(api_key) = &config.api_key {
        registry = registry.with_api_key(api_key);
    }
    if let Some(base_url) = &config.base_url {
        registry = registry.with_base_url(base_url);
    }
    if let Some(timeout_secs) = config.timeout_secs {
        registry = registry.with_timeout_secs(timeout_secs);
    }
    for (key, value) in &config.extra {
        registry = registry.with_extra(key, value);
    }
    registry
}
