//! Domain Value Objects
//!
//! Immutable value objects that flow through the recommendation pipeline.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Embedding`] | Vector representation of text |
//! | [`Query`] | Validated caller query with its result size |
//! | [`IndexedVector`] / [`IndexHit`] | Vector index input and output |
//! | [`ScoredCandidate`] | Catalog entry paired with its similarity |
//! | [`RecommendationResult`] | Final ordered result with side-channel outcome |
//! | [`RerankCandidate`] / [`RerankOutcome`] | Reordering provider payload and outcome |

/// Semantic embedding value objects
pub mod embedding;
/// Vector index value objects
pub mod index;
/// Query value objects
pub mod query;
/// Recommendation value objects
pub mod recommendation;
/// Reordering value objects
pub mod rerank;

pub use embedding::{Embedding, l2_norm, normalize_l2};
pub use index::{IndexHit, IndexedVector};
pub use query::{Query, QueryLimits};
pub use recommendation::{RecommendationItem, RecommendationResult, ScoredCandidate};
pub use rerank::{RerankCandidate, RerankOutcome};
