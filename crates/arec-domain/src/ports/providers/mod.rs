//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`EmbeddingProvider`] | Text embedding generation |
//! | [`VectorIndexProvider`] | Inner-product nearest-neighbor search |
//! | [`RerankProvider`] | Relevance reordering of a short candidate list |

/// Embedding provider port
pub mod embedding;
/// Rerank provider port
pub mod rerank;
/// Vector index provider port
pub mod vector_index;

pub use embedding::EmbeddingProvider;
pub use rerank::RerankProvider;
pub use vector_index::VectorIndexProvider;
