//! Configuration types module

pub mod app;
pub mod cache;
pub mod catalog;
pub mod engine;
pub mod logging;
pub mod providers;
pub mod server;

pub use app::AppConfig;
pub use cache::CacheConfig;
pub use catalog::CatalogConfig;
pub use engine::EngineConfig;
pub use logging::LoggingConfig;
pub use providers::{EmbeddingConfig, ProvidersConfig, RerankConfig, VectorIndexConfig};
pub use server::ServerConfig;
