//! Provider Registry System
//!
//! Auto-registration infrastructure for plugin providers. Uses the `linkme`
//! crate for compile-time registration of providers that are discovered and
//! instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(PROVIDERS)]  │
//! │                        static ENTRY: ProviderEntry = ...        │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static PROVIDERS: [Entry] = [..]     │
//! │                              ↓                                  │
//! │  3. Resolver queries:  PROVIDERS.iter()                         │
//! │                              ↓                                  │
//! │  4. Config selects:    "provider = gemini" → GeminiProvider     │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in arec-providers)
//!
//! ```ignore
//! use arec_application::ports::registry::{EmbeddingProviderEntry, EMBEDDING_PROVIDERS};
//!
//! #[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
//! static NULL_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
//!     name: "null",
//!     description: "Deterministic offline embeddings",
//!     factory: |config| Ok(Arc::new(NullEmbeddingProvider::from_config(config))),
//! };
//! ```
//!
//! ### Resolving a Provider (in arec-infrastructure)
//!
//! ```ignore
//! use arec_application::ports::registry::{EmbeddingProviderConfig, resolve_embedding_provider};
//!
//! let provider = resolve_embedding_provider(&EmbeddingProviderConfig::new("null"))?;
//! ```

pub mod embedding;
pub mod rerank;
pub mod vector_index;

pub use embedding::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry, list_embedding_providers,
    resolve_embedding_provider,
};
pub use rerank::{
    RERANK_PROVIDERS, RerankProviderConfig, RerankProviderEntry, list_rerank_providers,
    resolve_rerank_provider,
};
pub use vector_index::{
    VECTOR_INDEX_PROVIDERS, VectorIndexProviderConfig, VectorIndexProviderEntry,
    list_vector_index_providers, resolve_vector_index_provider,
};
