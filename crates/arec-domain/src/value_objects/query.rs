//! Query value objects

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TOP_K, MAX_QUERY_LENGTH, MAX_TOP_K, MIN_TOP_K};
use crate::error::{Error, Result};

/// Bounds applied when a caller query is validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryLimits {
    /// Maximum query length in characters
    pub max_length: usize,
    /// Result size used when the caller gives none
    pub default_top_k: usize,
    /// Largest accepted result size
    pub max_top_k: usize,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            max_length: MAX_QUERY_LENGTH,
            default_top_k: DEFAULT_TOP_K,
            max_top_k: MAX_TOP_K,
        }
    }
}

/// Value Object: validated query
///
/// Only constructible through validation, so every `Query` has non-blank
/// text within the length limit and a `top_k` inside `[1, max_top_k]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    text: String,
    top_k: usize,
}

impl Query {
    /// Validate with the default limits
    ///
    /// ```rust
    /// use arec_domain::Query;
    ///
    /// let query = Query::new("Java developer who collaborates", Some(50)).unwrap();
    /// assert_eq!(query.top_k(), 20);
    /// assert!(Query::new("   ", None).is_err());
    /// ```
    pub fn new(text: impl Into<String>, top_k: Option<usize>) -> Result<Self> {
        Self::with_limits(text, top_k, &QueryLimits::default())
    }

    /// Validate against explicit limits
    ///
    /// Blank or over-length text is a validation error. An out-of-range
    /// `top_k` is clamped rather than rejected.
    pub fn with_limits(
        text: impl Into<String>,
        top_k: Option<usize>,
        limits: &QueryLimits,
    ) -> Result<Self> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::validation("Query text must not be empty"));
        }
        let length = trimmed.chars().count();
        if length > limits.max_length {
            return Err(Error::validation(format!(
                "Query text is {length} characters, maximum is {}",
                limits.max_length
            )));
        }

        let max_top_k = limits.max_top_k.max(MIN_TOP_K);
        let top_k = top_k
            .unwrap_or(limits.default_top_k)
            .clamp(MIN_TOP_K, max_top_k);

        Ok(Self {
            text: trimmed.to_string(),
            top_k,
        })
    }

    /// Trimmed query text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of results requested
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Lowercased text with collapsed whitespace, used as a cache key
    pub fn normalized_text(&self) -> String {
        self.text
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
