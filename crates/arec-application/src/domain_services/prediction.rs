//! Batch Prediction
//!
//! Runs unlabeled queries through the recommendation service and collects the
//! recommended assessment URLs per query. A failing query keeps its row with
//! no URLs so the output lines up with the input.

use futures::stream::{self, StreamExt};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::ports::services::RecommendationServiceInterface;

/// Queries predicted at the same time
const PREDICTION_CONCURRENCY: usize = 4;

/// Recommended URLs for one query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    pub query: String,
    /// In rank order; empty when nothing was recommended
    pub urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Prediction {
    /// `(query, url)` rows, one per URL, or a single row with an empty URL
    pub fn rows(&self) -> Vec<(&str, &str)> {
        if self.urls.is_empty() {
            return vec![(self.query.as_str(), "")];
        }
        self.urls
            .iter()
            .map(|url| (self.query.as_str(), url.as_str()))
            .collect()
    }
}

/// Predict the top `top_k` URLs for each non-blank query, in input order
pub async fn predict(
    service: &dyn RecommendationServiceInterface,
    queries: &[String],
    top_k: usize,
) -> Vec<Prediction> {
    let answerable: Vec<&String> = queries
        .iter()
        .filter(|q| {
            let keep = !q.trim().is_empty() && !q.trim().eq_ignore_ascii_case("nan");
            if !keep {
                warn!("Blank query in batch, skipping");
            }
            keep
        })
        .collect();

    let predictions: Vec<Prediction> = stream::iter(answerable)
        .map(|query| predict_one(service, query, top_k))
        .buffered(PREDICTION_CONCURRENCY)
        .collect()
        .await;

    let answered = predictions.iter().filter(|p| !p.urls.is_empty()).count();
    info!(
        queries = predictions.len(),
        answered,
        "Predictions generated"
    );
    predictions
}

async fn predict_one(
    service: &dyn RecommendationServiceInterface,
    query: &str,
    top_k: usize,
) -> Prediction {
    match service.recommend_text(query, Some(top_k)).await {
        Ok(result) => {
            if result.is_empty() {
                warn!(query, "No recommendations for query");
            }
            Prediction {
                query: query.to_string(),
                urls: result.iter().map(|c| c.entry.url().to_string()).collect(),
                error: None,
            }
        }
        Err(err) => {
            error!(query, error = %err, "Query failed during prediction");
            Prediction {
                query: query.to_string(),
                urls: Vec::new(),
                error: Some(err.to_string()),
            }
        }
    }
}
