//! Rerank Provider Implementations
//!
//! | Provider | Notes |
//! |----------|-------|
//! | [`NullRerankProvider`] | Offline, returns the submitted order |
//! | [`GeminiRerankProvider`] | Google `generateContent` with a numbered prompt |

pub mod null;
pub mod prompt;

#[cfg(feature = "rerank-gemini")]
pub mod gemini;

pub use null::NullRerankProvider;
pub use prompt::{RankingParser, build_prompt};

#[cfg(feature = "rerank-gemini")]
pub use gemini::GeminiRerankProvider;
