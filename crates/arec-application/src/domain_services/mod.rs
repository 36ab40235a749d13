//! Domain Services
//!
//! The stages of the recommendation pipeline.
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`CatalogIndex`] | Read-only catalog table over a vector index provider |
//! | [`CandidateRetriever`] | Embeds a query and fetches over-provisioned candidates |
//! | [`dedupe`] | Drops repeated catalog ids, first occurrence wins |
//! | [`Reranker`] | Deadline-bounded reordering with deterministic fallback |
//! | [`balance`] | Minimum-mix rebalancing across category tags |
//! | [`evaluate`] | Offline recall@k over labeled queries |
//! | [`predict`] | Batch URL predictions for unlabeled queries |

/// Category balancing
pub mod balance;
/// Catalog table and vector index wrapper
pub mod catalog_index;
/// Candidate deduplication
pub mod dedup;
/// Offline evaluation
pub mod evaluation;
/// Batch predictions
pub mod prediction;
/// Relevance reordering
pub mod rerank;
/// Candidate retrieval
pub mod retrieval;

pub use balance::{BalanceMode, BalancePolicy, balance};
pub use catalog_index::CatalogIndex;
pub use dedup::dedupe;
pub use evaluation::{
    EvaluationReport, LabeledQuery, QueryScore, evaluate, parse_relevant_urls, recall_at_k,
};
pub use prediction::{Prediction, predict};
pub use rerank::{
    DeadlineRerank, ExternalRerank, IdentityRerank, RerankStrategy, Reranked, Reranker,
};
pub use retrieval::CandidateRetriever;
