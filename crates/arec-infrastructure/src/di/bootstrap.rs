//! Application bootstrap
//!
//! Resolves providers, loads and indexes the catalog once, and assembles the
//! recommendation service. The index is a read-only `Arc` handle shared by
//! every request.
//!
//! ```rust,ignore
//! let context = init_app(ConfigLoader::new().load()?).await?;
//! let result = context.service().recommend_text("Java developer", Some(5)).await?;
//! ```

use std::sync::Arc;

use arec_application::domain_services::{
    CandidateRetriever, CatalogIndex, DeadlineRerank, ExternalRerank, Reranker,
};
use arec_application::ports::services::RecommendationServiceInterface;
use arec_application::use_cases::RecommendationService;
use arec_domain::error::Result;
use arec_domain::ports::providers::EmbeddingProvider;
use tracing::info;

use crate::cache::CachedRecommendationService;
use crate::catalog::{CatalogLoader, CatalogRecord};
use crate::config::AppConfig;
use crate::di::resolvers::ProviderResolver;
use crate::utils::TimedOperation;

/// Everything a transport needs to serve requests
pub struct AppContext {
    config: Arc<AppConfig>,
    index: Arc<CatalogIndex>,
    embedding: Arc<dyn EmbeddingProvider>,
    service: Arc<dyn RecommendationServiceInterface>,
}

impl AppContext {
    /// Loaded configuration
    pub fn config(&self) -> Arc<AppConfig> {
        self.config.clone()
    }

    /// The shared catalog index
    pub fn index(&self) -> Arc<CatalogIndex> {
        self.index.clone()
    }

    /// Embedding provider used for catalog and queries
    pub fn embedding(&self) -> Arc<dyn EmbeddingProvider> {
        self.embedding.clone()
    }

    /// The recommendation service, cached when configured
    pub fn service(&self) -> Arc<dyn RecommendationServiceInterface> {
        self.service.clone()
    }
}

/// Build the application from the catalog file named in `config`
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    let records = CatalogLoader::read_records(&config.catalog.path).await?;
    init_app_with_records(config, records).await
}

/// Build the application from already parsed catalog records
pub async fn init_app_with_records(
    config: AppConfig,
    records: Vec<CatalogRecord>,
) -> Result<AppContext> {
    let timer = TimedOperation::start();
    let config = Arc::new(config);
    let resolver = ProviderResolver::new(config.clone());

    let embedding = resolver.embedding()?;
    let entries = CatalogLoader::new(embedding.clone())
        .with_batch_size(config.catalog.embed_batch_size)
        .into_entries(records)
        .await?;

    let vector_index = resolver.vector_index(embedding.dimensions())?;
    let index = Arc::new(CatalogIndex::build(vector_index, entries).await?);

    let engine = &config.engine;
    let retriever = CandidateRetriever::new(index.clone(), embedding.clone())
        .with_embed_timeout(engine.embed_timeout())
        .with_over_provision_factor(engine.over_provision_factor);

    let reranker = match resolver.rerank()? {
        Some(provider) => Reranker::new(DeadlineRerank::new(
            Arc::new(ExternalRerank::new(provider)),
            engine.rerank_timeout(),
        ))
        .with_subset_size(engine.rerank_subset_size),
        None => Reranker::disabled(),
    };

    let core: Arc<dyn RecommendationServiceInterface> = Arc::new(
        RecommendationService::new(retriever, reranker)
            .with_balance_policy(engine.balance.clone())
            .with_limits(engine.limits()),
    );
    let service: Arc<dyn RecommendationServiceInterface> = if config.cache.enabled {
        Arc::new(CachedRecommendationService::from_config(
            core,
            engine.limits(),
            &config.cache,
        ))
    } else {
        core
    };

    info!(
        entries = index.len(),
        dimensions = index.dimensions(),
        embedding = embedding.provider_name(),
        index = index.provider_name(),
        rerank = %config.providers.rerank.provider,
        rerank_enabled = config.providers.rerank.enabled,
        cache = config.cache.enabled,
        elapsed_ms = timer.elapsed_ms(),
        "Application initialized"
    );

    Ok(AppContext {
        config,
        index,
        embedding,
        service,
    })
}
