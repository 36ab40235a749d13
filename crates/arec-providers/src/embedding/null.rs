//! Null embedding provider for testing and offline use
//!
//! Produces deterministic feature-hashed embeddings: each lowercase word is
//! hashed into a bucket with a sign, so texts sharing words point in similar
//! directions. No external dependencies - always works offline.

use async_trait::async_trait;

use arec_domain::error::Result;
use arec_domain::ports::providers::EmbeddingProvider;
use arec_domain::value_objects::{Embedding, normalize_l2};

use crate::constants::EMBEDDING_DIMENSION_NULL;

const MODEL_NAME: &str = "null-hash";

/// Null embedding provider
///
/// # Example
///
/// ```rust
/// use arec_providers::embedding::NullEmbeddingProvider;
/// use arec_providers::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), 384);
/// assert_eq!(provider.provider_name(), "null");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NullEmbeddingProvider {
    dimensions: usize,
}

impl NullEmbeddingProvider {
    /// Create a provider with the default dimensionality
    pub fn new() -> Self {
        Self::with_dimensions(EMBEDDING_DIMENSION_NULL)
    }

    /// Create a provider producing `dimensions`-long vectors
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// Embed one text synchronously
    pub fn embed_sync(&self, text: &str) -> Embedding {
        let mut vector = vec![0.0_f32; self.dimensions];
        let lower = text.to_lowercase();
        let mut words = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .peekable();

        if words.peek().is_none() {
            let trimmed = lower.trim();
            if !trimmed.is_empty() {
                self.accumulate(&mut vector, trimmed);
            }
        } else {
            for word in words {
                self.accumulate(&mut vector, word);
            }
        }

        normalize_l2(&mut vector);
        Embedding::new(vector, MODEL_NAME)
    }

    fn accumulate(&self, vector: &mut [f32], token: &str) {
        let hash = fnv1a(token.as_bytes());
        let bucket = usize::try_from(hash % self.dimensions as u64).unwrap_or(0);
        let sign = if (hash >> 63) == 0 { 1.0 } else { -1.0 };
        vector[bucket] += sign;
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0100_0000_01b3;
    bytes
        .iter()
        .fold(OFFSET, |hash, b| (hash ^ u64::from(*b)).wrapping_mul(PRIME))
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts.iter().map(|t| self.embed_sync(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use arec_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static NULL_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "null",
    description: "Offline provider for testing (deterministic feature-hashed embeddings)",
    factory: |config: &EmbeddingProviderConfig| {
        let provider = config
            .dimensions
            .map_or_else(NullEmbeddingProvider::new, NullEmbeddingProvider::with_dimensions);
        Ok(std::sync::Arc::new(provider))
    },
};
