//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{
    CacheConfig, CatalogConfig, EngineConfig, LoggingConfig, ProvidersConfig, ServerConfig,
};

/// Root configuration
///
/// ```toml
/// [logging]
/// level = "debug"
///
/// [providers.embedding]
/// provider = "gemini"
///
/// [engine]
/// rerank_timeout_secs = 10
///
/// [engine.balance]
/// mode = "always"
///
/// [server]
/// port = 8080
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub providers: ProvidersConfig,
    pub engine: EngineConfig,
    pub catalog: CatalogConfig,
    pub cache: CacheConfig,
    pub server: ServerConfig,
}
