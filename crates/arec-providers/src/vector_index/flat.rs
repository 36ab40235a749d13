//! Flat inner-product vector index
//!
//! Exact search over a row-major matrix held in memory. The built matrix is
//! published as one immutable snapshot, so searches never block and a rebuild
//! swaps the whole index at once.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use async_trait::async_trait;

use arec_domain::error::{Error, Result};
use arec_domain::ports::providers::VectorIndexProvider;
use arec_domain::{IndexHit, IndexedVector};

/// Immutable built state
struct Snapshot {
    ids: Vec<String>,
    /// `ids.len() * dimensions` values, one row per vector
    matrix: Vec<f32>,
    dimensions: usize,
}

impl Snapshot {
    fn row(&self, ordinal: usize) -> &[f32] {
        let start = ordinal * self.dimensions;
        &self.matrix[start..start + self.dimensions]
    }
}

/// Heap item ordered so that "greater" means "ranks earlier"
#[derive(Debug, Clone, Copy)]
struct ScoredItem {
    score: f32,
    ordinal: usize,
}

impl PartialEq for ScoredItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredItem {}

impl PartialOrd for ScoredItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredItem {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.ordinal.cmp(&self.ordinal))
    }
}

fn inner_product(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Exact flat inner-product index
///
/// Does not normalize: with unit vectors the inner product is the cosine
/// similarity.
#[derive(Default)]
pub struct FlatVectorIndex {
    snapshot: ArcSwapOption<Snapshot>,
    expected_dimensions: Option<usize>,
}

impl FlatVectorIndex {
    /// Create an empty, unbuilt index
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject builds whose vectors are not `dimensions` long
    pub fn with_expected_dimensions(dimensions: usize) -> Self {
        Self {
            snapshot: ArcSwapOption::empty(),
            expected_dimensions: Some(dimensions),
        }
    }
}

#[async_trait]
impl VectorIndexProvider for FlatVectorIndex {
    async fn build(&self, vectors: Vec<IndexedVector>) -> Result<()> {
        let Some(first) = vectors.first() else {
            return Err(Error::CatalogEmpty);
        };
        let dimensions = self.expected_dimensions.unwrap_or(first.vector.len());
        if dimensions == 0 {
            return Err(Error::invalid_argument("Cannot index zero-length vectors"));
        }

        let mut ids = Vec::with_capacity(vectors.len());
        let mut matrix = Vec::with_capacity(vectors.len() * dimensions);
        for IndexedVector { id, vector } in vectors {
            if vector.len() != dimensions {
                return Err(Error::dimension_mismatch(dimensions, vector.len()));
            }
            ids.push(id);
            matrix.extend_from_slice(&vector);
        }

        self.snapshot.store(Some(Arc::new(Snapshot {
            ids,
            matrix,
            dimensions,
        })));
        Ok(())
    }

    async fn search(&self, query: &[f32], limit: usize) -> Result<Vec<IndexHit>> {
        let guard = self.snapshot.load();
        let Some(snapshot) = &*guard else {
            return Err(Error::IndexNotBuilt);
        };
        if query.len() != snapshot.dimensions {
            return Err(Error::dimension_mismatch(snapshot.dimensions, query.len()));
        }

        let limit = limit.min(snapshot.ids.len());
        if limit == 0 {
            return Ok(Vec::new());
        }

        // Min-heap of the best `limit` items: O(n log k)
        let mut heap: BinaryHeap<Reverse<ScoredItem>> = BinaryHeap::with_capacity(limit + 1);
        for ordinal in 0..snapshot.ids.len() {
            let item = ScoredItem {
                score: inner_product(query, snapshot.row(ordinal)),
                ordinal,
            };
            if heap.len() < limit {
                heap.push(Reverse(item));
            } else if heap.peek().is_some_and(|worst| item > worst.0) {
                heap.pop();
                heap.push(Reverse(item));
            }
        }

        let mut items: Vec<ScoredItem> = heap.into_iter().map(|Reverse(item)| item).collect();
        items.sort_unstable_by(|a, b| b.cmp(a));

        Ok(items
            .into_iter()
            .map(|item| IndexHit {
                ordinal: item.ordinal,
                id: snapshot.ids[item.ordinal].clone(),
                similarity: item.score,
            })
            .collect())
    }

    fn is_built(&self) -> bool {
        self.snapshot.load().is_some()
    }

    fn len(&self) -> usize {
        self.snapshot.load_full().map_or(0, |s| s.ids.len())
    }

    fn dimensions(&self) -> Option<usize> {
        self.snapshot
            .load_full()
            .map(|s| s.dimensions)
            .or(self.expected_dimensions)
    }

    fn provider_name(&self) -> &str {
        "flat"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use arec_application::ports::registry::{
    VECTOR_INDEX_PROVIDERS, VectorIndexProviderConfig, VectorIndexProviderEntry,
};

#[linkme::distributed_slice(VECTOR_INDEX_PROVIDERS)]
static FLAT_PROVIDER: VectorIndexProviderEntry = VectorIndexProviderEntry {
    name: "flat",
    description: "Exact in-memory inner-product index",
    factory: |config: &VectorIndexProviderConfig| {
        let index = config
            .dimensions
            .map_or_else(FlatVectorIndex::new, FlatVectorIndex::with_expected_dimensions);
        Ok(Arc::new(index))
    },
};
