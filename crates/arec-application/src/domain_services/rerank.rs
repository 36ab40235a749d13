//! Relevance Reordering
//!
//! Reordering is a best-effort enhancement. A [`RerankStrategy`] reorders a
//! candidate list; [`DeadlineRerank`] bounds the primary strategy with a hard
//! deadline and falls back to a pure strategy on timeout, error or malformed
//! output. [`Reranker`] applies that to a bounded prefix of the candidates and
//! reports what happened through [`RerankOutcome`].

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use arec_domain::constants::{
    DEFAULT_RERANK_SUBSET_SIZE, DEFAULT_RERANK_TIMEOUT_SECS, RERANK_DESCRIPTION_MAX_CHARS,
    RERANK_SKILLS_MAX_CHARS, TRUNCATION_SUFFIX,
};
use arec_domain::error::{Error, Result};
use arec_domain::ports::providers::RerankProvider;
use arec_domain::{RerankCandidate, RerankOutcome, ScoredCandidate};
use async_trait::async_trait;
use tracing::{debug, warn};

/// A way of reordering candidates
#[async_trait]
pub trait RerankStrategy: Send + Sync {
    /// Return the same candidates in a new order
    async fn reorder(
        &self,
        query: &str,
        candidates: Vec<ScoredCandidate>,
    ) -> Result<Vec<ScoredCandidate>>;

    /// Strategy identifier for logs
    fn name(&self) -> &str;
}

/// Keeps the input order
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityRerank;

#[async_trait]
impl RerankStrategy for IdentityRerank {
    async fn reorder(
        &self,
        _query: &str,
        candidates: Vec<ScoredCandidate>,
    ) -> Result<Vec<ScoredCandidate>> {
        Ok(candidates)
    }

    fn name(&self) -> &str {
        "identity"
    }
}

/// Delegates ordering to an external [`RerankProvider`]
///
/// The provider answer must be a permutation of exactly the submitted ids;
/// anything else is `RerankMalformed`.
pub struct ExternalRerank {
    provider: Arc<dyn RerankProvider>,
}

impl ExternalRerank {
    /// Wrap a provider
    pub fn new(provider: Arc<dyn RerankProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl RerankStrategy for ExternalRerank {
    async fn reorder(
        &self,
        query: &str,
        candidates: Vec<ScoredCandidate>,
    ) -> Result<Vec<ScoredCandidate>> {
        let payload: Vec<RerankCandidate> = candidates.iter().map(to_rerank_candidate).collect();
        let order = self.provider.rank(query, &payload).await?;
        apply_permutation(candidates, &order)
    }

    fn name(&self) -> &str {
        self.provider.provider_name()
    }
}

/// Bounds a primary strategy with a deadline and a fallback
pub struct DeadlineRerank {
    primary: Arc<dyn RerankStrategy>,
    fallback: Arc<dyn RerankStrategy>,
    deadline: Duration,
}

impl DeadlineRerank {
    /// Guard `primary` with `deadline`, falling back to the input order
    pub fn new(primary: Arc<dyn RerankStrategy>, deadline: Duration) -> Self {
        Self {
            primary,
            fallback: Arc::new(IdentityRerank),
            deadline,
        }
    }

    /// Guard an external provider with the default deadline
    pub fn for_provider(provider: Arc<dyn RerankProvider>) -> Self {
        Self::new(
            Arc::new(ExternalRerank::new(provider)),
            Duration::from_secs(DEFAULT_RERANK_TIMEOUT_SECS),
        )
    }

    /// Replace the fallback strategy
    pub fn with_fallback(mut self, fallback: Arc<dyn RerankStrategy>) -> Self {
        self.fallback = fallback;
        self
    }

    /// Configured deadline
    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Reorder and report the outcome. Never fails.
    pub async fn reorder_with_outcome(
        &self,
        query: &str,
        candidates: Vec<ScoredCandidate>,
    ) -> (Vec<ScoredCandidate>, RerankOutcome) {
        let input = candidates.clone();
        let outcome =
            match tokio::time::timeout(self.deadline, self.primary.reorder(query, candidates))
                .await
            {
                Ok(Ok(reordered)) => {
                    debug!(
                        strategy = self.primary.name(),
                        candidates = reordered.len(),
                        "Candidates reordered"
                    );
                    return (reordered, RerankOutcome::Applied);
                }
                Ok(Err(err)) => {
                    let outcome = match err {
                        Error::RerankTimeout { .. } => RerankOutcome::TimedOut,
                        Error::RerankMalformed { .. } => RerankOutcome::Malformed,
                        _ => RerankOutcome::ProviderFailed,
                    };
                    warn!(
                        strategy = self.primary.name(),
                        outcome = %outcome,
                        error = %err,
                        "Reordering failed, keeping similarity order"
                    );
                    outcome
                }
                Err(_) => {
                    warn!(
                        strategy = self.primary.name(),
                        deadline = ?self.deadline,
                        "Reordering missed its deadline, keeping similarity order"
                    );
                    RerankOutcome::TimedOut
                }
            };

        match self.fallback.reorder(query, input.clone()).await {
            Ok(ordered) => (ordered, outcome),
            Err(err) => {
                warn!(
                    strategy = self.fallback.name(),
                    error = %err,
                    "Fallback reordering failed, keeping input order"
                );
                (input, outcome)
            }
        }
    }
}

#[async_trait]
impl RerankStrategy for DeadlineRerank {
    async fn reorder(
        &self,
        query: &str,
        candidates: Vec<ScoredCandidate>,
    ) -> Result<Vec<ScoredCandidate>> {
        Ok(self.reorder_with_outcome(query, candidates).await.0)
    }

    fn name(&self) -> &str {
        self.primary.name()
    }
}

/// Output of [`Reranker::rerank`]
#[derive(Debug, Clone)]
pub struct Reranked {
    pub candidates: Vec<ScoredCandidate>,
    pub outcome: RerankOutcome,
}

/// Reorders the first `subset_size` candidates and appends the tail unchanged
pub struct Reranker {
    strategy: Option<DeadlineRerank>,
    subset_size: usize,
}

impl Reranker {
    /// Reorder through `strategy`
    pub fn new(strategy: DeadlineRerank) -> Self {
        Self {
            strategy: Some(strategy),
            subset_size: DEFAULT_RERANK_SUBSET_SIZE,
        }
    }

    /// Never reorder; every call reports `Disabled`
    pub fn disabled() -> Self {
        Self {
            strategy: None,
            subset_size: DEFAULT_RERANK_SUBSET_SIZE,
        }
    }

    /// Number of leading candidates handed to the strategy
    pub fn with_subset_size(mut self, subset_size: usize) -> Self {
        self.subset_size = subset_size.max(1);
        self
    }

    /// Whether a strategy is configured
    pub fn is_enabled(&self) -> bool {
        self.strategy.is_some()
    }

    /// Reorder `candidates` for `query`. Never fails.
    pub async fn rerank(&self, query: &str, mut candidates: Vec<ScoredCandidate>) -> Reranked {
        let Some(strategy) = &self.strategy else {
            return Reranked {
                candidates,
                outcome: RerankOutcome::Disabled,
            };
        };

        let head_len = self.subset_size.min(candidates.len());
        if head_len < 2 {
            return Reranked {
                candidates,
                outcome: RerankOutcome::Skipped,
            };
        }

        let tail = candidates.split_off(head_len);
        let (mut reordered, outcome) = strategy.reorder_with_outcome(query, candidates).await;
        reordered.extend(tail);
        Reranked {
            candidates: reordered,
            outcome,
        }
    }
}

/// Build the provider payload for one candidate
pub fn to_rerank_candidate(candidate: &ScoredCandidate) -> RerankCandidate {
    let entry = &candidate.entry;
    RerankCandidate {
        id: entry.id.clone(),
        name: entry.name.clone(),
        description: truncate_chars(&entry.description, RERANK_DESCRIPTION_MAX_CHARS),
        skills: truncate_chars(&entry.skills, RERANK_SKILLS_MAX_CHARS),
    }
}

/// Cut `text` to `max_chars` characters, marking the cut
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{TRUNCATION_SUFFIX}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Reorder `candidates` by `order`, which must name each candidate exactly once
fn apply_permutation(
    candidates: Vec<ScoredCandidate>,
    order: &[String],
) -> Result<Vec<ScoredCandidate>> {
    if order.len() != candidates.len() {
        return Err(Error::rerank_malformed(format!(
            "expected {} ids, got {}",
            candidates.len(),
            order.len()
        )));
    }

    let positions: HashMap<&str, usize> = candidates
        .iter()
        .enumerate()
        .map(|(i, c)| (c.id(), i))
        .collect();
    let mut indices = Vec::with_capacity(order.len());
    let mut used = vec![false; candidates.len()];
    for id in order {
        let Some(&index) = positions.get(id.as_str()) else {
            return Err(Error::rerank_malformed(format!("unknown id '{id}'")));
        };
        if std::mem::replace(&mut used[index], true) {
            return Err(Error::rerank_malformed(format!("id '{id}' listed twice")));
        }
        indices.push(index);
    }

    let mut slots: Vec<Option<ScoredCandidate>> = candidates.into_iter().map(Some).collect();
    Ok(indices
        .into_iter()
        .filter_map(|index| slots[index].take())
        .collect())
}
