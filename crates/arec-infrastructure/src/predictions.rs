//! Query and prediction files
//!
//! Queries come from a CSV file whose query column is found by name
//! (`Query`, `text`, `job_description`, ...) or is the first column.
//! Predictions are written as `Query,Assessment_url` rows.

use std::path::Path;

use arec_application::domain_services::Prediction;
use arec_domain::error::{Error, Result};
use tracing::{info, warn};

use crate::constants::{PREDICTION_HEADERS, QUERY_COLUMN_NAMES};
use crate::error_ext::ErrorContext;

/// Read the query column of a CSV file
pub fn read_queries(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .io_context(format!("Failed to open queries {}", path.display()))?;

    let headers = reader
        .headers()
        .context(format!("Failed to read headers of {}", path.display()))?
        .clone();
    if headers.is_empty() {
        return Err(Error::invalid_argument(format!(
            "Queries file {} has no columns",
            path.display()
        )));
    }

    let column = headers
        .iter()
        .position(|h| QUERY_COLUMN_NAMES.contains(&h.trim().to_lowercase().as_str()))
        .unwrap_or_else(|| {
            warn!(
                column = headers.get(0).unwrap_or_default(),
                "No query column found, using the first column"
            );
            0
        });

    let mut queries = Vec::new();
    for record in reader.records() {
        let record = record.context(format!("Malformed row in {}", path.display()))?;
        queries.push(record.get(column).unwrap_or_default().to_string());
    }
    info!(path = %path.display(), queries = queries.len(), "Queries loaded");
    Ok(queries)
}

/// Write one `Query,Assessment_url` row per predicted URL; returns the row count
pub fn write_predictions(path: &Path, predictions: &[Prediction]) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)
        .io_context(format!("Failed to create {}", path.display()))?;
    writer
        .write_record(PREDICTION_HEADERS)
        .context("Failed to write prediction header")?;

    let mut rows = 0;
    for prediction in predictions {
        for (query, url) in prediction.rows() {
            writer
                .write_record([query, url])
                .context("Failed to write prediction row")?;
            rows += 1;
        }
    }
    writer
        .flush()
        .io_context(format!("Failed to flush {}", path.display()))?;

    info!(path = %path.display(), rows, "Predictions saved");
    Ok(rows)
}
