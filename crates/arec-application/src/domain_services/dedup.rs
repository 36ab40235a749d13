use std::collections::HashSet;

use arec_domain::ScoredCandidate;

/// Remove candidates whose id was already seen, keeping the first occurrence.
///
/// Pure and order-preserving; `dedupe(dedupe(x)) == dedupe(x)`.
pub fn dedupe(candidates: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    let mut seen = HashSet::with_capacity(candidates.len());
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.id().to_owned()))
        .collect()
}
