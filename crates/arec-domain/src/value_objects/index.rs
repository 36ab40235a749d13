//! Vector index value objects

/// One vector handed to the index at build time
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedVector {
    /// Identity of the catalog entry the vector belongs to
    pub id: String,
    /// Normalized embedding
    pub vector: Vec<f32>,
}

impl IndexedVector {
    /// Create an indexed vector
    pub fn new(id: impl Into<String>, vector: Vec<f32>) -> Self {
        Self {
            id: id.into(),
            vector,
        }
    }
}

/// A search hit
///
/// `ordinal` is the insertion position of the vector in the build input, so
/// callers can resolve the hit even when two entries share an `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexHit {
    /// Insertion position in the build input
    pub ordinal: usize,
    /// Identity of the matched entry
    pub id: String,
    /// Inner product with the query vector
    pub similarity: f32,
}
