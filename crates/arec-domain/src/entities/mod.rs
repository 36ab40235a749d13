//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`CatalogEntry`] | One recommendable assessment with its embedding |
//! | [`CategoryTag`] | Knowledge, personality or hybrid classification |

/// Catalog entry entity
pub mod catalog_entry;

pub use catalog_entry::{CatalogEntry, CategoryTag};
