//! Application Layer - Assessment Recommendation Engine
//!
//! Implements the recommendation pipeline on top of the domain ports:
//!
//! ```text
//! Query → CandidateRetriever → dedupe → Reranker → balance → truncate
//! ```
//!
//! ## Organization
//!
//! - `domain_services::*`: the pipeline stages (catalog index, retrieval,
//!   deduplication, reordering, balancing) and offline evaluation
//! - `use_cases::*`: [`RecommendationService`], the only entry point callers use
//! - `ports::*`: service interfaces and the provider registries
//!
//! ## Dependencies
//!
//! This crate depends only on `arec-domain` and pure Rust libraries. Concrete
//! providers are discovered through the `linkme` registries at link time.

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
