//! Recommendation value objects

use std::sync::Arc;

use serde::Serialize;

use super::rerank::RerankOutcome;
use crate::entities::{CatalogEntry, CategoryTag};

/// A catalog entry paired with its similarity to the query
///
/// The entry is shared with the catalog table, never copied.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    /// Shared catalog entry
    pub entry: Arc<CatalogEntry>,
    /// Inner product of the normalized query and entry vectors
    pub similarity: f32,
}

impl ScoredCandidate {
    /// Pair an entry with a similarity
    pub fn new(entry: Arc<CatalogEntry>, similarity: f32) -> Self {
        Self { entry, similarity }
    }

    /// Identity key of the entry
    pub fn id(&self) -> &str {
        &self.entry.id
    }

    /// Category of the entry
    pub fn category_tag(&self) -> CategoryTag {
        self.entry.category_tag
    }
}

/// Ordered, duplicate-free recommendation output
#[derive(Debug, Clone)]
pub struct RecommendationResult {
    /// Candidates in final order
    pub candidates: Vec<ScoredCandidate>,
    /// What happened in the reordering stage
    pub rerank: RerankOutcome,
    /// Whether the category balancer ran
    pub balanced: bool,
}

impl RecommendationResult {
    /// Number of results
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the result is empty
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Iterate candidates in order
    pub fn iter(&self) -> impl Iterator<Item = &ScoredCandidate> {
        self.candidates.iter()
    }

    /// Ids in result order
    pub fn ids(&self) -> Vec<&str> {
        self.candidates.iter().map(ScoredCandidate::id).collect()
    }

    /// Caller-facing records
    pub fn to_items(&self) -> Vec<RecommendationItem> {
        self.candidates.iter().map(RecommendationItem::from).collect()
    }
}

/// Caller-facing recommendation record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationItem {
    pub id: String,
    pub name: String,
    pub url: String,
    pub category_tag: CategoryTag,
    pub similarity: f32,
    pub description: String,
    pub skills: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

impl From<&ScoredCandidate> for RecommendationItem {
    fn from(candidate: &ScoredCandidate) -> Self {
        let entry = &candidate.entry;
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            url: entry.url().to_string(),
            category_tag: entry.category_tag,
            similarity: candidate.similarity,
            description: entry.description.clone(),
            skills: entry.skills.clone(),
            duration: entry.duration.clone(),
            difficulty: entry.difficulty.clone(),
        }
    }
}
