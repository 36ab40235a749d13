//! Category Balancing
//!
//! Rebalances the final ordered list so both primary categories reach a
//! minimum count when such candidates exist. Works on indices into the ranked
//! slice; entries are only cloned once the final selection is known.

use arec_domain::constants::DEFAULT_MIN_PER_CATEGORY;
use arec_domain::{CategoryTag, ScoredCandidate};
use serde::{Deserialize, Serialize};

const DEFAULT_SINGLE_CATEGORY_MARKERS: &[&str] =
    &["only", "just", "solely", "exclusively", "purely"];

const DEFAULT_KNOWLEDGE_KEYWORDS: &[&str] = &[
    "developer",
    "coding",
    "programming",
    "technical",
    "skill",
    "knowledge",
    "aptitude",
    "ability",
    "engineer",
    "software",
    "programmer",
    "coder",
];

const DEFAULT_PERSONALITY_KEYWORDS: &[&str] = &[
    "personality",
    "behavior",
    "behaviour",
    "teamwork",
    "collaboration",
    "communication",
    "leadership",
    "soft skill",
    "interpersonal",
    "team",
    "collaborate",
    "communicate",
];

/// When the balancer runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceMode {
    /// Every query
    Always,
    /// Never
    Never,
    /// Unless the query asks for a single category
    #[default]
    Auto,
}

/// Balancing policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalancePolicy {
    pub mode: BalanceMode,
    /// Minimum entries of each primary category
    pub min_per_category: usize,
    /// Words that mark a request as exclusive ("only", "just", ...)
    pub single_category_markers: Vec<String>,
    /// Words that point at knowledge assessments
    pub knowledge_keywords: Vec<String>,
    /// Words that point at personality assessments
    pub personality_keywords: Vec<String>,
}

impl Default for BalancePolicy {
    fn default() -> Self {
        let owned = |words: &[&str]| words.iter().map(|w| (*w).to_string()).collect();
        Self {
            mode: BalanceMode::Auto,
            min_per_category: DEFAULT_MIN_PER_CATEGORY,
            single_category_markers: owned(DEFAULT_SINGLE_CATEGORY_MARKERS),
            knowledge_keywords: owned(DEFAULT_KNOWLEDGE_KEYWORDS),
            personality_keywords: owned(DEFAULT_PERSONALITY_KEYWORDS),
        }
    }
}

impl BalancePolicy {
    /// Policy with the given mode and default word lists
    pub fn with_mode(mode: BalanceMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Whether `query` should be balanced
    pub fn applies_to(&self, query: &str) -> bool {
        match self.mode {
            BalanceMode::Always => true,
            BalanceMode::Never => false,
            BalanceMode::Auto => !self.has_single_category_signal(query),
        }
    }

    /// An exclusivity marker together with keywords of exactly one category
    fn has_single_category_signal(&self, query: &str) -> bool {
        let lower = query.to_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        let marked = self
            .single_category_markers
            .iter()
            .any(|m| mentions(&lower, &words, m));
        if !marked {
            return false;
        }

        let knowledge = self
            .knowledge_keywords
            .iter()
            .any(|k| mentions(&lower, &words, k));
        let personality = self
            .personality_keywords
            .iter()
            .any(|k| mentions(&lower, &words, k));
        knowledge != personality
    }
}

/// Single words match whole words; phrases match as substrings
fn mentions(lower: &str, words: &[&str], keyword: &str) -> bool {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return false;
    }
    if keyword.contains(char::is_whitespace) {
        lower.contains(&keyword)
    } else {
        words.contains(&keyword.as_str())
    }
}

/// Rebalance `ranked` so each primary category has at least `min_per_category`
/// entries in the first `top_k`, when the candidates allow it.
///
/// Starts from the top `top_k` by rank. While a category is short, the
/// lowest-ranked selected entry of the other pure category is replaced by the
/// highest-ranked unselected entry satisfying the short one. A pure entry may
/// only come in while the other category stays at or above its own minimum;
/// hybrids count for both and can always come in. The output keeps rank order
/// and has length `min(top_k, ranked.len())`.
pub fn balance(
    ranked: &[ScoredCandidate],
    top_k: usize,
    min_per_category: usize,
) -> Vec<ScoredCandidate> {
    let take = top_k.min(ranked.len());
    let mut selected: Vec<usize> = (0..take).collect();
    let mut chosen = vec![false; ranked.len()];
    chosen[..take].fill(true);

    let tag = |i: usize| ranked[i].category_tag();
    let count = |selected: &[usize], target: CategoryTag| {
        selected.iter().filter(|&&i| tag(i).satisfies(target)).count()
    };

    for target in CategoryTag::PRIMARY {
        let Some(other) = target.counterpart() else {
            continue;
        };
        while count(&selected, target) < min_per_category {
            let other_has_spare = count(&selected, other) > min_per_category;
            let Some(incoming) = (0..ranked.len()).find(|&i| {
                !chosen[i]
                    && tag(i).satisfies(target)
                    && (other_has_spare || tag(i).satisfies(other))
            }) else {
                break;
            };
            let Some(slot) = selected.iter().rposition(|&i| tag(i) == other) else {
                break;
            };
            chosen[selected[slot]] = false;
            chosen[incoming] = true;
            selected[slot] = incoming;
        }
    }

    selected.sort_unstable();
    selected.into_iter().map(|i| ranked[i].clone()).collect()
}
