//! Catalog Index
//!
//! Owns the catalog table and the vector index built from it. Built once at
//! startup and shared read-only (`Arc<CatalogIndex>`) by every request.

use std::sync::Arc;

use arec_domain::error::{Error, Result};
use arec_domain::ports::providers::VectorIndexProvider;
use arec_domain::{CatalogEntry, IndexedVector, ScoredCandidate};
use tracing::{debug, info, warn};

/// Read-only catalog table plus its vector index
pub struct CatalogIndex {
    provider: Arc<dyn VectorIndexProvider>,
    entries: Vec<Arc<CatalogEntry>>,
    dimensions: usize,
}

impl CatalogIndex {
    /// Build the index from catalog entries
    ///
    /// Fails with `CatalogEmpty` for an empty catalog and with
    /// `DimensionMismatch` when embeddings disagree in length.
    pub async fn build(
        provider: Arc<dyn VectorIndexProvider>,
        entries: Vec<CatalogEntry>,
    ) -> Result<Self> {
        let Some(first) = entries.first() else {
            return Err(Error::CatalogEmpty);
        };
        let dimensions = first.dimensions();
        if dimensions == 0 {
            return Err(Error::invalid_argument(format!(
                "Catalog entry '{}' has an empty embedding",
                first.id
            )));
        }
        if let Some(bad) = entries.iter().find(|e| e.dimensions() != dimensions) {
            return Err(Error::dimension_mismatch(dimensions, bad.dimensions()));
        }

        let vectors = entries
            .iter()
            .map(|e| IndexedVector::new(e.id.clone(), e.embedding.clone()))
            .collect();
        provider.build(vectors).await?;

        info!(
            entries = entries.len(),
            dimensions,
            provider = provider.provider_name(),
            "Catalog index built"
        );

        Ok(Self {
            provider,
            entries: entries.into_iter().map(Arc::new).collect(),
            dimensions,
        })
    }

    /// Return the `n` most similar entries to `query`
    ///
    /// `query` must already be normalized and have the index dimensionality.
    pub async fn search(&self, query: &[f32], n: usize) -> Result<Vec<ScoredCandidate>> {
        if query.len() != self.dimensions {
            return Err(Error::dimension_mismatch(self.dimensions, query.len()));
        }

        let hits = self.provider.search(query, n).await?;
        debug!(requested = n, returned = hits.len(), "Vector search completed");

        let mut candidates = Vec::with_capacity(hits.len());
        for hit in hits {
            match self.entries.get(hit.ordinal) {
                Some(entry) if entry.id == hit.id => {
                    candidates.push(ScoredCandidate::new(Arc::clone(entry), hit.similarity));
                }
                _ => warn!(
                    ordinal = hit.ordinal,
                    id = %hit.id,
                    "Index hit does not resolve to a catalog entry, skipping"
                ),
            }
        }
        Ok(candidates)
    }

    /// Entry at an insertion position
    pub fn get(&self, ordinal: usize) -> Option<&Arc<CatalogEntry>> {
        self.entries.get(ordinal)
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[Arc<CatalogEntry>] {
        &self.entries
    }

    /// Number of catalog entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a built index; kept for API symmetry
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Embedding dimensionality shared by every entry
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Name of the backing vector index provider
    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }
}
