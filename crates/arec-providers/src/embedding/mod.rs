//! Embedding Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Notes |
//! |----------|------|-------|
//! | [`NullEmbeddingProvider`] | Offline | Deterministic feature hashing |
//! | [`GeminiEmbeddingProvider`] | API | Google `embedContent` |

pub mod helpers;
pub mod null;

#[cfg(feature = "embedding-gemini")]
pub mod gemini;

pub use null::NullEmbeddingProvider;

#[cfg(feature = "embedding-gemini")]
pub use gemini::GeminiEmbeddingProvider;
