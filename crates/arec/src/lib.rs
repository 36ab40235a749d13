//! # arec
//!
//! Assessment recommendation engine: a natural-language hiring need goes in,
//! a short ranked list of catalog assessments comes out.
//!
//! ## Example
//!
//! ```ignore
//! use arec::infrastructure::config::ConfigLoader;
//! use arec::infrastructure::di::init_app;
//!
//! let context = init_app(ConfigLoader::new().load()?).await?;
//! let result = context
//!     .service()
//!     .recommend_text("Java developer who collaborates with business teams", Some(10))
//!     .await?;
//! for item in result.to_items() {
//!     println!("{} [{}] {}", item.name, item.category_tag, item.url);
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - entities, value objects, errors and provider ports
//! - `application` - retrieval, reranking, balancing and evaluation
//! - `infrastructure` - configuration, logging, catalog loading, caching, DI
//! - `server` - the HTTP API (`arec serve`)
//! - `cli` - the `arec` command line

/// Domain layer - core types, errors and provider ports
pub mod domain {
    pub use arec_domain::*;
}

/// Application layer - pipeline services and use cases
pub mod application {
    pub use arec_application::*;
}

/// Infrastructure layer - config, logging, catalog and composition root
pub mod infrastructure {
    pub use arec_infrastructure::*;
}

/// HTTP transport
pub mod server {
    pub use arec_server::*;
}

pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use application::RecommendationService;
pub use application::ports::services::RecommendationServiceInterface;
pub use cli::{Cli, run};
