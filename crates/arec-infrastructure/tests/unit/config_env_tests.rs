//! Tests for `AREC__` environment overrides
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p arec-infrastructure --test unit config_env -- --test-threads=1 --ignored
//! ```
//!
//! # Safety
//!
//! Rust 2024 requires `unsafe` for `env::set_var`/`env::remove_var`.
//! Tests MUST run with `--test-threads=1` to prevent data races.

use std::env;

use arec_infrastructure::config::ConfigLoader;

fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_nested_env_vars_override_defaults() {
    set_env("AREC__ENGINE__RERANK_TIMEOUT_SECS", "7");
    set_env("AREC__PROVIDERS__RERANK__ENABLED", "false");

    let config = ConfigLoader::new().load().expect("config loads");

    assert_eq!(config.engine.rerank_timeout_secs, 7);
    assert!(!config.providers.rerank.enabled);

    remove_env("AREC__ENGINE__RERANK_TIMEOUT_SECS");
    remove_env("AREC__PROVIDERS__RERANK__ENABLED");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_single_underscore_prefix_is_ignored() {
    set_env("AREC_ENGINE_RERANK_TIMEOUT_SECS", "7");

    let config = ConfigLoader::new().load().expect("config loads");
    assert_eq!(config.engine.rerank_timeout_secs, 30);

    remove_env("AREC_ENGINE_RERANK_TIMEOUT_SECS");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_gemini_api_key_env_fills_missing_key() {
    set_env("AREC__PROVIDERS__EMBEDDING__PROVIDER", "gemini");
    set_env("GEMINI_API_KEY", "env-key");

    let config = ConfigLoader::new().load().expect("config loads");
    assert_eq!(config.providers.embedding.api_key.as_deref(), Some("env-key"));

    remove_env("AREC__PROVIDERS__EMBEDDING__PROVIDER");
    remove_env("GEMINI_API_KEY");
}
