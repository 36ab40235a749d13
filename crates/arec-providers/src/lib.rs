//! # arec - Provider Implementations
//!
//! User-selectable adapters for the ports defined in `arec-domain`. Every
//! provider registers itself in the `linkme` registries of
//! `arec-application`, so linking this crate is enough to make it resolvable
//! by name.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | Gemini, Null |
//! | Vector Index | `VectorIndexProvider` | Flat |
//! | Rerank | `RerankProvider` | Gemini, Null |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! arec-providers = { version = "0.1", default-features = false }
//! ```

pub use arec_domain::error::{Error, Result};
pub use arec_domain::ports::providers::{EmbeddingProvider, RerankProvider, VectorIndexProvider};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Embedding provider implementations
pub mod embedding;

/// Vector index provider implementations
pub mod vector_index;

/// Rerank provider implementations
pub mod rerank;
