//! Catalog Loading
//!
//! Reads assessment records from JSON, embeds the ones without a vector and
//! turns them into [`CatalogEntry`](arec_domain::CatalogEntry) values ready
//! for indexing.

mod loader;
mod record;

pub use loader::CatalogLoader;
pub use record::{CatalogFile, CatalogRecord};
