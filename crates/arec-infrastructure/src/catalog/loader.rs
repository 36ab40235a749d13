//! Catalog loader

use std::path::Path;
use std::sync::Arc;

use arec_domain::error::{Error, Result};
use arec_domain::ports::providers::EmbeddingProvider;
use arec_domain::value_objects::normalize_l2;
use arec_domain::{CatalogEntry, CategoryTag};
use tracing::{debug, info, warn};

use super::record::{CatalogFile, CatalogRecord};
use crate::constants::CATALOG_EMBED_BATCH_SIZE;
use crate::error_ext::ErrorContext;

/// Builds catalog entries from records
///
/// Records that cannot become an entry (no id or url, no name, unknown
/// category, zero vector) are skipped with a warning.
pub struct CatalogLoader {
    embedding: Arc<dyn EmbeddingProvider>,
    batch_size: usize,
}

impl CatalogLoader {
    /// Embed missing vectors with `embedding`
    pub fn new(embedding: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            embedding,
            batch_size: CATALOG_EMBED_BATCH_SIZE,
        }
    }

    /// Documents per embedding call
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Read and parse a JSON catalog file
    pub async fn read_records(path: &Path) -> Result<Vec<CatalogRecord>> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .io_context(format!("Failed to read catalog {}", path.display()))?;
        let file: CatalogFile = serde_json::from_str(&raw).map_err(|e| {
            warn!(path = %path.display(), "Catalog is not a valid record list");
            Error::from(e)
        })?;
        Ok(file.into_records())
    }

    /// Read `path` and build entries
    pub async fn load(&self, path: &Path) -> Result<Vec<CatalogEntry>> {
        let records = Self::read_records(path).await?;
        info!(path = %path.display(), records = records.len(), "Catalog file read");
        self.into_entries(records).await
    }

    /// Turn records into normalized entries, embedding where needed
    ///
    /// Output keeps the record order.
    pub async fn into_entries(&self, records: Vec<CatalogRecord>) -> Result<Vec<CatalogEntry>> {
        let total = records.len();
        let mut slots: Vec<CatalogEntry> = Vec::with_capacity(total);
        let mut pending: Vec<(usize, String)> = Vec::new();

        for (row, record) in records.into_iter().enumerate() {
            let Some(entry) = to_entry(row, &record) else {
                continue;
            };
            if entry.embedding.is_empty() {
                pending.push((slots.len(), record.document_text()));
            }
            slots.push(entry);
        }

        for batch in pending.chunks(self.batch_size) {
            let texts: Vec<String> = batch.iter().map(|(_, text)| text.clone()).collect();
            let vectors = self.embedding.embed_batch(&texts).await?;
            if vectors.len() != texts.len() {
                return Err(Error::embedding_service(format!(
                    "{} returned {} embeddings for {} documents",
                    self.embedding.provider_name(),
                    vectors.len(),
                    texts.len()
                )));
            }
            for ((slot, _), embedding) in batch.iter().zip(vectors) {
                slots[*slot].embedding = embedding.vector;
            }
            debug!(batch = texts.len(), "Catalog batch embedded");
        }

        slots.retain_mut(|entry| {
            if normalize_l2(&mut entry.embedding) == 0.0 {
                warn!(id = %entry.id, "Catalog entry has a zero vector, skipping");
                return false;
            }
            true
        });

        info!(
            records = total,
            entries = slots.len(),
            embedded = pending.len(),
            provider = self.embedding.provider_name(),
            "Catalog entries prepared"
        );
        Ok(slots)
    }
}

fn to_entry(row: usize, record: &CatalogRecord) -> Option<CatalogEntry> {
    let Some(id) = record.key() else {
        warn!(row, "Catalog record has neither id nor url, skipping");
        return None;
    };
    let name = record.name.trim();
    if name.is_empty() {
        warn!(row, id, "Catalog record has no name, skipping");
        return None;
    }
    let raw_tag = record.category_tag.as_deref().unwrap_or_default();
    let tag = match raw_tag.parse::<CategoryTag>() {
        Ok(tag) => tag,
        Err(err) => {
            warn!(row, id, tag = raw_tag, error = %err, "Catalog record has no usable category, skipping");
            return None;
        }
    };

    let mut entry = CatalogEntry::new(id, name, tag, record.embedding.clone().unwrap_or_default())
        .with_description(record.description.trim())
        .with_skills(record.skills.trim());
    entry.url = record.url.clone();
    entry.duration = record.duration.clone();
    entry.difficulty = record.difficulty.clone();
    entry.use_cases = record.use_cases.clone();
    Some(entry)
}
