//! Result caching
//!
//! [`CachedRecommendationService`] wraps any recommendation service with a
//! Moka cache keyed by normalized query text and result size.

mod recommendation;

pub use recommendation::{CacheKey, CachedRecommendationService};
