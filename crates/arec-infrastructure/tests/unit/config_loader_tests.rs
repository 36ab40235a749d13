//! Tests for file-based configuration loading

use std::io::Write;

use arec_application::domain_services::BalanceMode;
use arec_domain::error::Error;
use arec_infrastructure::config::loader::{apply_api_key_fallback, validate_app_config};
use arec_infrastructure::config::{AppConfig, ConfigLoader};
use tempfile::NamedTempFile;

fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_defaults_are_valid() {
    let config = AppConfig::default();
    validate_app_config(&config).expect("defaults validate");
    assert_eq!(config.providers.embedding.provider, "null");
    assert_eq!(config.providers.vector_index.provider, "flat");
    assert!(config.providers.rerank.enabled);
    assert!(!config.cache.enabled);
    assert_eq!(config.engine.default_top_k, 10);
    assert_eq!(config.engine.max_top_k, 20);
    assert_eq!(config.engine.balance.mode, BalanceMode::Auto);
}

#[test]
fn test_file_overrides_defaults() {
    let file = toml_file(
        r#"
[logging]
level = "debug"

[providers.embedding]
provider = "null"
dimensions = 64

[engine]
rerank_timeout_secs = 5
over_provision_factor = 3

[engine.balance]
mode = "never"
min_per_category = 1

[cache]
enabled = true
ttl_secs = 60
"#,
    );

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect("config loads");

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.providers.embedding.dimensions, Some(64));
    assert_eq!(config.engine.rerank_timeout_secs, 5);
    assert_eq!(config.engine.over_provision_factor, 3);
    assert_eq!(config.engine.embed_timeout_secs, 30);
    assert_eq!(config.engine.balance.mode, BalanceMode::Never);
    assert_eq!(config.engine.balance.min_per_category, 1);
    assert!(!config.engine.balance.knowledge_keywords.is_empty());
    assert!(config.cache.enabled);
    assert_eq!(config.cache.ttl_secs, 60);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let result = ConfigLoader::new()
        .with_config_path("/definitely/not/here/arec.toml")
        .load();
    assert!(matches!(result, Err(Error::Config { .. })));
}

#[test]
fn test_invalid_values_are_rejected() {
    for contents in [
        "[engine]\ndefault_top_k = 50",
        "[engine]\nover_provision_factor = 0",
        "[engine]\nrerank_timeout_secs = 0",
        "[engine]\nrerank_subset_size = 0",
        "[logging]\nlevel = \"loud\"",
        "[cache]\nenabled = true\nttl_secs = 0",
        "[providers.embedding]\nprovider = \"\"",
    ] {
        let file = toml_file(contents);
        let result = ConfigLoader::new().with_config_path(file.path()).load();
        assert!(result.is_err(), "{contents:?} should be rejected");
    }
}

#[test]
fn test_malformed_toml_is_a_configuration_error() {
    let file = toml_file("[engine\nmax_top_k = ");
    let result = ConfigLoader::new().with_config_path(file.path()).load();
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_save_then_load() {
    let mut config = AppConfig::default();
    config.engine.max_top_k = 15;
    config.providers.rerank.enabled = false;

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("arec.toml");
    let loader = ConfigLoader::new().with_config_path(&path);
    loader.save_to_file(&config, &path).expect("save");

    let loaded = loader.load().expect("load");
    assert_eq!(loaded.engine.max_top_k, 15);
    assert!(!loaded.providers.rerank.enabled);
}

#[test]
fn test_api_key_fallback_only_fills_gemini_gaps() {
    let mut config = AppConfig::default();
    config.providers.embedding.provider = "gemini".to_string();
    config.providers.rerank.provider = "gemini".to_string();
    config.providers.rerank.api_key = Some("explicit".to_string());

    apply_api_key_fallback(&mut config, Some("from-env".to_string()));

    assert_eq!(config.providers.embedding.api_key.as_deref(), Some("from-env"));
    assert_eq!(config.providers.rerank.api_key.as_deref(), Some("explicit"));

    let mut offline = AppConfig::default();
    apply_api_key_fallback(&mut offline, Some("from-env".to_string()));
    assert_eq!(offline.providers.embedding.api_key, None);
}
