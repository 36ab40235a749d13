//! Domain Port Interfaces
//!
//! Contracts for the external collaborators the engine depends on. Concrete
//! adapters live in `arec-providers` and register themselves with the
//! registries in `arec-application`.

/// External provider ports
pub mod providers;

pub use providers::{EmbeddingProvider, RerankProvider, VectorIndexProvider};
