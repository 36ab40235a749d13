//! Composition Root
//!
//! ```text
//! AppConfig → ProviderResolver → linkme registries → Arc<dyn Provider>
//!                                                        ↓
//!          catalog file → CatalogLoader → CatalogIndex → RecommendationService
//! ```

pub mod bootstrap;
pub mod resolvers;

pub use bootstrap::{AppContext, init_app, init_app_with_records};
pub use resolvers::ProviderResolver;
