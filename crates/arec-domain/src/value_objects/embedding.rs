//! Semantic Embedding Value Objects

use serde::{Deserialize, Serialize};

/// Value Object: Semantic Text Embedding
///
/// Vector produced by an embedding provider for one text.
///
/// ## Example
///
/// ```rust
/// use arec_domain::Embedding;
///
/// let mut embedding = Embedding::new(vec![3.0, 4.0], "null");
/// embedding.normalize();
/// assert!((embedding.vector[0] - 0.6).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// Create an embedding; dimensions follow the vector length
    pub fn new(vector: Vec<f32>, model: impl Into<String>) -> Self {
        let dimensions = vector.len();
        Self {
            vector,
            model: model.into(),
            dimensions,
        }
    }

    /// Whether every component is zero
    pub fn is_zero(&self) -> bool {
        self.vector.iter().all(|v| *v == 0.0)
    }

    /// Scale the vector to unit length in place, returning the original norm
    pub fn normalize(&mut self) -> f32 {
        normalize_l2(&mut self.vector)
    }
}

/// Euclidean norm of a vector
pub fn l2_norm(vector: &[f32]) -> f32 {
    vector.iter().map(|v| v * v).sum::<f32>().sqrt()
}

/// Scale `vector` to unit length in place and return its original norm.
///
/// A zero vector is left untouched.
pub fn normalize_l2(vector: &mut [f32]) -> f32 {
    let norm = l2_norm(vector);
    if norm > 0.0 {
        for v in vector.iter_mut() {
            *v /= norm;
        }
    }
    norm
}
