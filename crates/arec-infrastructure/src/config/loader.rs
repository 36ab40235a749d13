//! Configuration loader
//!
//! Sources are merged in this order, later ones overriding earlier ones:
//! 1. `AppConfig::default()`
//! 2. TOML file (explicit path, or the first default location that exists)
//! 3. Environment variables `AREC__SECTION__KEY`
//!
//! Gemini providers without an `api_key` then fall back to `GEMINI_API_KEY`.

use std::env;
use std::path::{Path, PathBuf};

use arec_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
    GEMINI_API_KEY_ENV,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a loader with the default prefix and file lookup
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Read this file instead of searching the default locations
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load, merge and validate configuration
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        match &self.config_path {
            Some(path) if path.exists() => {
                figment = figment.merge(Toml::file(path));
                log_config_loaded(path, true);
            }
            Some(path) => {
                log_config_loaded(path, false);
                return Err(Error::config(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            None => {
                if let Some(default_path) = Self::find_default_config_path() {
                    figment = figment.merge(Toml::file(&default_path));
                    log_config_loaded(&default_path, true);
                }
            }
        }

        let prefix = format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix);
        figment = figment.merge(Env::prefixed(&prefix).split(CONFIG_ENV_SEPARATOR));

        let mut config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        apply_api_key_fallback(&mut config, env::var(GEMINI_API_KEY_ENV).ok());
        validate_app_config(&config)?;
        Ok(config)
    }

    /// Write `config` as TOML
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;
        std::fs::write(path.as_ref(), toml_string).io_context(format!(
            "Failed to write config file {}",
            path.as_ref().display()
        ))?;
        Ok(())
    }

    /// Explicit configuration file, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;
        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];
        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Fill missing Gemini API keys from `key`
pub fn apply_api_key_fallback(config: &mut AppConfig, key: Option<String>) {
    let Some(key) = key.filter(|k| !k.trim().is_empty()) else {
        return;
    };
    let embedding = &mut config.providers.embedding;
    if embedding.provider == "gemini" && embedding.api_key.is_none() {
        embedding.api_key = Some(key.clone());
    }
    let rerank = &mut config.providers.rerank;
    if rerank.provider == "gemini" && rerank.api_key.is_none() {
        rerank.api_key = Some(key);
    }
}

/// Validate every configuration section
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;
    validate_engine_config(config)?;
    validate_provider_config(config)?;
    validate_catalog_config(config)?;
    validate_cache_config(config)?;
    validate_server_config(config)?;
    Ok(())
}

fn validate_engine_config(config: &AppConfig) -> Result<()> {
    let engine = &config.engine;
    if engine.max_top_k == 0 {
        return Err(Error::config("engine.max_top_k must be at least 1"));
    }
    if engine.default_top_k == 0 || engine.default_top_k > engine.max_top_k {
        return Err(Error::config(format!(
            "engine.default_top_k must be between 1 and {}",
            engine.max_top_k
        )));
    }
    if engine.max_query_length == 0 {
        return Err(Error::config("engine.max_query_length must be at least 1"));
    }
    if engine.over_provision_factor == 0 {
        return Err(Error::config("engine.over_provision_factor must be at least 1"));
    }
    if engine.rerank_subset_size == 0 {
        return Err(Error::config("engine.rerank_subset_size must be at least 1"));
    }
    if engine.embed_timeout_secs == 0 || engine.rerank_timeout_secs == 0 {
        return Err(Error::config("engine timeouts must be positive"));
    }
    Ok(())
}

fn validate_provider_config(config: &AppConfig) -> Result<()> {
    let providers = &config.providers;
    for (section, name) in [
        ("embedding", &providers.embedding.provider),
        ("vector_index", &providers.vector_index.provider),
        ("rerank", &providers.rerank.provider),
    ] {
        if name.trim().is_empty() {
            return Err(Error::config(format!(
                "providers.{section}.provider cannot be empty"
            )));
        }
    }
    if providers.embedding.dimensions == Some(0) {
        return Err(Error::config("providers.embedding.dimensions cannot be 0"));
    }
    Ok(())
}

fn validate_catalog_config(config: &AppConfig) -> Result<()> {
    if config.catalog.embed_batch_size == 0 {
        return Err(Error::config("catalog.embed_batch_size must be at least 1"));
    }
    Ok(())
}

fn validate_cache_config(config: &AppConfig) -> Result<()> {
    if config.cache.enabled && (config.cache.ttl_secs == 0 || config.cache.capacity == 0) {
        return Err(Error::config(
            "cache.ttl_secs and cache.capacity must be positive when the cache is enabled",
        ));
    }
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.host.trim().is_empty() {
        return Err(Error::config("server.host cannot be empty"));
    }
    Ok(())
}
