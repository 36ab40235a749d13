//! Vector Index Provider Registry

use std::collections::HashMap;
use std::sync::Arc;

use arec_domain::ports::providers::VectorIndexProvider;

/// Configuration for vector index provider creation
#[derive(Debug, Clone, Default)]
pub struct VectorIndexProviderConfig {
    /// Provider name (e.g., "flat")
    pub provider: String,
    /// Expected dimensionality, checked at build time when set
    pub dimensions: Option<usize>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl VectorIndexProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the expected dimensions
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for vector index providers
pub struct VectorIndexProviderEntry {
    /// Unique provider name (e.g., "flat")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&VectorIndexProviderConfig) -> Result<Arc<dyn VectorIndexProvider>, String>,
}

#[linkme::distributed_slice]
pub static VECTOR_INDEX_PROVIDERS: [VectorIndexProviderEntry] = [..];

/// Resolve vector index provider by name from registry
pub fn resolve_vector_index_provider(
    config: &VectorIndexProviderConfig,
) -> Result<Arc<dyn VectorIndexProvider>, String> {
    let provider_name = &config.provider;

    for entry in VECTOR_INDEX_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = VECTOR_INDEX_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown vector index provider '{provider_name}'. Available providers: {available:?}"
    ))
}

/// List all registered vector index providers as (name, description) tuples
pub fn list_vector_index_providers() -> Vec<(&'static str, &'static str)> {
    VECTOR_INDEX_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
