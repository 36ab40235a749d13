//! Rerank Provider Registry

use std::collections::HashMap;
use std::sync::Arc;

use arec_domain::ports::providers::RerankProvider;

/// Configuration for rerank provider creation
#[derive(Debug, Clone, Default)]
pub struct RerankProviderConfig {
    /// Provider name (e.g., "gemini", "null")
    pub provider: String,
    /// Model name/identifier
    pub model: Option<String>,
    /// API key for authentication
    pub api_key: Option<String>,
    /// Base URL for the provider API
    pub base_url: Option<String>,
    /// Transport-level request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl RerankProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for rerank providers
pub struct RerankProviderEntry {
    /// Unique provider name (e.g., "gemini", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&RerankProviderConfig) -> Result<Arc<dyn RerankProvider>, String>,
}

#[linkme::distributed_slice]
pub static RERANK_PROVIDERS: [RerankProviderEntry] = [..];

/// Resolve rerank provider by name from registry
pub fn resolve_rerank_provider(
    config: &RerankProviderConfig,
) -> Result<Arc<dyn RerankProvider>, String> {
    let provider_name = &config.provider;

    for entry in RERANK_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = RERANK_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown rerank provider '{provider_name}'. Available providers: {available:?}"
    ))
}

/// List all registered rerank providers as (name, description) tuples
pub fn list_rerank_providers() -> Vec<(&'static str, &'static str)> {
    RERANK_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
