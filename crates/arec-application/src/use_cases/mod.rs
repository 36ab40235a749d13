//! Use Cases
//!
//! Application services exposed to the outer layers.

/// Recommendation use case
pub mod recommendation_service;

pub use recommendation_service::RecommendationService;
