//! Provider selection
//!
//! Each section names a provider registered in the linkme registries plus the
//! settings its factory understands.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Embedding provider settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Registered provider name ("null", "gemini")
    pub provider: String,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub dimensions: Option<usize>,
    pub timeout_secs: Option<u64>,
    /// Provider-specific settings
    pub extra: HashMap<String, String>,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: "null".to_string(),
            model: None,
            api_key: None,
            base_url: None,
            dimensions: None,
            timeout_secs: None,
            extra: HashMap::new(),
        }
    }
}

/// Vector index provider settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorIndexConfig {
    /// Registered provider name ("flat")
    pub provider: String,
    pub extra: HashMap<String, String>,
}

impl Default for VectorIndexConfig {
    fn default() -> Self {
        Self {
            provider: "flat".to_string(),
            extra: HashMap::new(),
        }
    }
}

/// Rerank provider settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RerankConfig {
    /// Turn the reordering stage off entirely
    pub enabled: bool,
    /// Registered provider name ("null", "gemini")
    pub provider: String,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    /// HTTP timeout of the provider client; the engine deadline is separate
    pub timeout_secs: Option<u64>,
    pub extra: HashMap<String, String>,
}

impl Default for RerankConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: "null".to_string(),
            model: None,
            api_key: None,
            base_url: None,
            timeout_secs: None,
            extra: HashMap::new(),
        }
    }
}

/// Provider configurations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub embedding: EmbeddingConfig,
    pub vector_index: VectorIndexConfig,
    pub rerank: RerankConfig,
}
