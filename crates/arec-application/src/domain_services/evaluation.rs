//! Offline Evaluation
//!
//! Mean recall@k of the recommendation service over labeled queries.

use std::collections::HashSet;

use futures::stream::{self, StreamExt};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, error, info, warn};

use crate::ports::services::RecommendationServiceInterface;

/// Labeled queries evaluated at the same time
const EVALUATION_CONCURRENCY: usize = 4;

/// A query with the URLs judged relevant for it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LabeledQuery {
    #[serde(alias = "Query", alias = "text", alias = "job_description")]
    pub query: String,
    /// Accepts a list or one delimited string
    #[serde(
        alias = "Relevant_URLs",
        alias = "relevant",
        alias = "Relevant_Assessment_URLs",
        deserialize_with = "deserialize_relevant"
    )]
    pub relevant_urls: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RelevantField {
    Many(Vec<String>),
    One(String),
}

fn deserialize_relevant<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let urls = match RelevantField::deserialize(deserializer)? {
        RelevantField::One(raw) => parse_relevant_urls(&raw),
        RelevantField::Many(list) => list.iter().flat_map(|raw| parse_relevant_urls(raw)).collect(),
    };
    Ok(urls)
}

/// Score of one labeled query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryScore {
    pub query: String,
    pub recall: f64,
    /// Relevant URLs found in the top k
    pub hits: usize,
    /// Number of relevant URLs
    pub relevant: usize,
    /// Why the query scored 0 without being answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregate result of an evaluation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub k: usize,
    pub per_query: Vec<QueryScore>,
    /// Mean recall over scored queries, 0 when nothing was scored
    pub mean_recall: f64,
    /// Queries without any relevant URL, left out of the mean
    pub skipped: usize,
}

impl EvaluationReport {
    /// Queries that failed to produce recommendations
    pub fn failed(&self) -> usize {
        self.per_query.iter().filter(|s| s.error.is_some()).count()
    }
}

/// Split a delimited URL list on `,` `;` `|` or newlines.
///
/// Empty, `nan` and `none` tokens are dropped, as are repeats.
pub fn parse_relevant_urls(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split([',', ';', '|', '\n'])
        .map(str::trim)
        .filter(|url| {
            !url.is_empty() && !url.eq_ignore_ascii_case("nan") && !url.eq_ignore_ascii_case("none")
        })
        .filter(|url| seen.insert(*url))
        .map(str::to_string)
        .collect()
}

/// |top-k ∩ relevant| / |relevant|, or 0 when nothing is relevant
pub fn recall_at_k<S: AsRef<str>>(predicted: &[S], relevant: &[String], k: usize) -> f64 {
    let distinct: HashSet<&str> = relevant.iter().map(String::as_str).collect();
    if distinct.is_empty() {
        return 0.0;
    }
    hits_at_k(predicted, relevant, k) as f64 / distinct.len() as f64
}

/// Number of distinct relevant URLs among the first `k` predictions
fn hits_at_k<S: AsRef<str>>(predicted: &[S], relevant: &[String], k: usize) -> usize {
    let relevant: HashSet<&str> = relevant.iter().map(String::as_str).collect();
    let top: HashSet<&str> = predicted.iter().take(k).map(AsRef::as_ref).collect();
    top.intersection(&relevant).count()
}

/// Run every labeled query through `service` and score recall@k
pub async fn evaluate(
    service: &dyn RecommendationServiceInterface,
    labeled: &[LabeledQuery],
    k: usize,
) -> EvaluationReport {
    info!(queries = labeled.len(), k, "Starting evaluation");

    let scorable: Vec<&LabeledQuery> = labeled
        .iter()
        .filter(|l| {
            let keep = !l.relevant_urls.is_empty() && !l.query.trim().is_empty();
            if !keep {
                warn!(query = %l.query, "Labeled query has no text or relevant URLs, skipping");
            }
            keep
        })
        .collect();
    let skipped = labeled.len() - scorable.len();

    let per_query: Vec<QueryScore> = stream::iter(scorable)
        .map(|labeled| score_query(service, labeled, k))
        .buffered(EVALUATION_CONCURRENCY)
        .collect()
        .await;

    let mean_recall = if per_query.is_empty() {
        0.0
    } else {
        per_query.iter().map(|s| s.recall).sum::<f64>() / per_query.len() as f64
    };
    info!(
        scored = per_query.len(),
        skipped,
        mean_recall,
        "Evaluation finished"
    );

    EvaluationReport {
        k,
        per_query,
        mean_recall,
        skipped,
    }
}

async fn score_query(
    service: &dyn RecommendationServiceInterface,
    labeled: &LabeledQuery,
    k: usize,
) -> QueryScore {
    let relevant = labeled.relevant_urls.len();
    match service.recommend_text(&labeled.query, Some(k)).await {
        Ok(result) => {
            let predicted: Vec<&str> = result.iter().map(|c| c.entry.url()).collect();
            let recall = recall_at_k(&predicted, &labeled.relevant_urls, k);
            let hits = hits_at_k(&predicted, &labeled.relevant_urls, k);
            debug!(query = %labeled.query, recall, "Query scored");
            QueryScore {
                query: labeled.query.clone(),
                recall,
                hits,
                relevant,
                error: None,
            }
        }
        Err(err) => {
            error!(query = %labeled.query, error = %err, "Query failed during evaluation");
            QueryScore {
                query: labeled.query.clone(),
                recall: 0.0,
                hits: 0,
                relevant,
                error: Some(err.to_string()),
            }
        }
    }
}
