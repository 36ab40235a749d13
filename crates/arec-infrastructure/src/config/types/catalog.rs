//! Catalog source configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{CATALOG_EMBED_BATCH_SIZE, DEFAULT_CATALOG_PATH};

/// Where the catalog comes from and how it is embedded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON catalog file
    pub path: PathBuf,
    /// Documents per embedding call
    pub embed_batch_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CATALOG_PATH),
            embed_batch_size: CATALOG_EMBED_BATCH_SIZE,
        }
    }
}
