use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{IndexHit, IndexedVector};

/// Nearest-Neighbor Search Interface
///
/// Exact or approximate inner-product search over vectors supplied once at
/// build time. Implementations do not normalize; callers hand in unit
/// vectors.
///
/// # Contract
///
/// - `search` before `build` fails with `Error::IndexNotBuilt`
/// - hits are ordered by descending similarity, ties by insertion order
/// - `limit` larger than the index returns every vector
/// - a query of the wrong dimension fails with `Error::DimensionMismatch`
#[async_trait]
pub trait VectorIndexProvider: Send + Sync {
    /// Replace the index contents with `vectors`
    ///
    /// Fails with `Error::CatalogEmpty` for an empty input and with
    /// `Error::DimensionMismatch` when the vectors disagree in length.
    async fn build(&self, vectors: Vec<IndexedVector>) -> Result<()>;

    /// Return up to `limit` hits for `query`
    async fn search(&self, query: &[f32], limit: usize) -> Result<Vec<IndexHit>>;

    /// Whether `build` has completed
    fn is_built(&self) -> bool;

    /// Number of indexed vectors (0 before build)
    fn len(&self) -> usize;

    /// Whether the index holds no vectors
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dimensionality fixed at build time
    fn dimensions(&self) -> Option<usize>;

    /// Provider identifier (e.g., "flat")
    fn provider_name(&self) -> &str;
}
