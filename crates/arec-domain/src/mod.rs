//! # Domain Layer
//!
//! Core types of the assessment recommendation engine.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Catalog entries and their category tags |
//! | [`value_objects`] | Queries, scored candidates, results, embeddings |
//! | [`ports`] | Provider contracts (embedding, vector index, rerank) |
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`constants`] | Engine defaults and bounds |
//!
//! This crate has no knowledge of configuration, transport or concrete
//! providers; those live in the outer crates.

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::{CatalogEntry, CategoryTag};
pub use error::{Error, Result};
pub use value_objects::{
    Embedding, IndexHit, IndexedVector, Query, QueryLimits, RecommendationItem,
    RecommendationResult, RerankCandidate, RerankOutcome, ScoredCandidate,
};
