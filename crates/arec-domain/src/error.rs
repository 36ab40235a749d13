//! Error handling types

use std::time::Duration;

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by wrapping variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the recommendation engine
#[derive(Error, Debug)]
pub enum Error {
    /// Caller input was rejected (empty or over-length query, bad arguments)
    #[error("Validation error: {message}")]
    Validation {
        /// Description of the rejected input
        message: String,
    },

    /// The query could not be embedded
    #[error("Embedding service error: {message}")]
    EmbeddingService {
        /// Description of the embedding failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Search was attempted before the vector index was built
    #[error("Vector index has not been built")]
    IndexNotBuilt,

    /// The catalog handed to the index builder was empty
    #[error("Catalog is empty: nothing to index")]
    CatalogEmpty,

    /// Vectors of different lengths met in one index
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimensionality fixed by the index
        expected: usize,
        /// Dimensionality that was supplied
        actual: usize,
    },

    /// The reordering provider missed its deadline
    #[error("Rerank timed out after {timeout:?}")]
    RerankTimeout {
        /// Deadline that was exceeded
        timeout: Duration,
    },

    /// The reordering provider failed
    #[error("Rerank service error: {message}")]
    RerankService {
        /// Description of the provider failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// The reordering provider answered with something that is not a permutation
    #[error("Rerank response malformed: {message}")]
    RerankMalformed {
        /// What was wrong with the response
        message: String,
    },

    /// A recommendation request failed upstream of reordering
    #[error("Recommendation failed: {source}")]
    RecommendationFailed {
        /// The underlying cause
        #[source]
        source: Box<Error>,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error (simple form)
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
    },

    /// Configuration-related error (with source)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Infrastructure failure wrapped with context
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Engine error creation methods
impl Error {
    /// Create a validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an embedding service error
    pub fn embedding_service<S: Into<String>>(message: S) -> Self {
        Self::EmbeddingService {
            message: message.into(),
            source: None,
        }
    }

    /// Create an embedding service error with source
    pub fn embedding_service_with_source<S: Into<String>, E: Into<BoxedSource>>(
        message: S,
        source: E,
    ) -> Self {
        Self::EmbeddingService {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Wrap an upstream failure into a recommendation failure
    pub fn recommendation_failed(source: Error) -> Self {
        Self::RecommendationFailed {
            source: Box::new(source),
        }
    }
}

// Rerank error creation methods
impl Error {
    /// Create a rerank timeout error
    pub fn rerank_timeout(timeout: Duration) -> Self {
        Self::RerankTimeout { timeout }
    }

    /// Create a rerank service error
    pub fn rerank_service<S: Into<String>>(message: S) -> Self {
        Self::RerankService {
            message: message.into(),
            source: None,
        }
    }

    /// Create a rerank service error with source
    pub fn rerank_service_with_source<S: Into<String>, E: Into<BoxedSource>>(
        message: S,
        source: E,
    ) -> Self {
        Self::RerankService {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a malformed rerank response error
    pub fn rerank_malformed<S: Into<String>>(message: S) -> Self {
        Self::RerankMalformed {
            message: message.into(),
        }
    }

    /// Whether this error belongs to the absorbed reordering stage
    pub fn is_rerank(&self) -> bool {
        matches!(
            self,
            Self::RerankTimeout { .. } | Self::RerankService { .. } | Self::RerankMalformed { .. }
        )
    }
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<S: Into<String>, E: Into<BoxedSource>>(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: Into<BoxedSource>>(message: S, source: E) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error (simple)
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<S: Into<String>, E: Into<BoxedSource>>(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }
}
