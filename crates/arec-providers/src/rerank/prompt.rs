//! Numbered-list prompt for text-generation rerankers
//!
//! Candidates are numbered 1..n; the model answers with the numbers in
//! relevance order, which [`RankingParser`] maps back to zero-based positions.

use std::collections::HashSet;
use std::fmt::Write as _;

use regex::Regex;

use arec_domain::RerankCandidate;
use arec_domain::error::{Error, Result};

/// Build the reordering prompt for `query` and `candidates`
pub fn build_prompt(query: &str, candidates: &[RerankCandidate]) -> String {
    let mut listing = String::new();
    for (i, candidate) in candidates.iter().enumerate() {
        if i > 0 {
            listing.push_str("\n\n");
        }
        let _ = write!(listing, "Assessment {}: {}", i + 1, candidate.name);
        if !candidate.description.is_empty() {
            let _ = write!(listing, "\n   Description: {}", candidate.description);
        }
        if !candidate.skills.is_empty() {
            let _ = write!(listing, "\n   Skills: {}", candidate.skills);
        }
    }

    format!(
        "You are an assessment recommendation system. Re-rank assessments by relevance \
         to this job query.\n\n\
         JOB QUERY: \"{query}\"\n\n\
         CANDIDATE ASSESSMENTS (currently ranked by similarity):\n{listing}\n\n\
         Re-rank all {n} assessments from MOST RELEVANT to LEAST RELEVANT for the job query. \
         Match assessments to the actual job requirements.\n\n\
         Return ONLY the assessment numbers in the new order, comma-separated, each number \
         exactly once. Example: 5,7,8,1,2,3,4,6,9,10",
        n = candidates.len()
    )
}

/// Parses a model answer into a permutation of candidate positions
#[derive(Debug, Clone)]
pub struct RankingParser {
    prefix: Regex,
    brackets: Regex,
    number_run: Regex,
    number: Regex,
}

impl RankingParser {
    /// Compile the parser
    pub fn new() -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern)
                .map_err(|e| Error::internal(format!("Invalid ranking pattern {pattern}: {e}")))
        };
        Ok(Self {
            prefix: compile(
                r"(?i)^\s*(ranking|order|result|output|assessments?|recommendations?)\s*:?\s*",
            )?,
            brackets: compile(r"[\[\]()]")?,
            number_run: compile(r"\d+(?:\s*,\s*\d+)+")?,
            number: compile(r"\b\d+\b")?,
        })
    }

    /// Parse `text` into zero-based positions for `n` candidates
    ///
    /// Common prefixes and brackets are ignored. When the answer contains a
    /// comma-separated run of numbers, only that run is read. The result must
    /// name every position exactly once; anything else is `RerankMalformed`.
    pub fn parse(&self, text: &str, n: usize) -> Result<Vec<usize>> {
        let cleaned = self.prefix.replace(text.trim(), "");
        let cleaned = self.brackets.replace_all(&cleaned, "");
        let ranking = self
            .number_run
            .find(&cleaned)
            .map_or(cleaned.as_ref(), |m| m.as_str());

        let mut seen = HashSet::with_capacity(n);
        let mut positions = Vec::with_capacity(n);
        for token in self.number.find_iter(ranking) {
            let number: usize = token
                .as_str()
                .parse()
                .map_err(|_| Error::rerank_malformed(format!("'{}' is not a number", token.as_str())))?;
            if number == 0 || number > n {
                return Err(Error::rerank_malformed(format!(
                    "position {number} out of range 1..={n}"
                )));
            }
            if !seen.insert(number) {
                return Err(Error::rerank_malformed(format!(
                    "position {number} listed twice"
                )));
            }
            positions.push(number - 1);
        }

        if positions.len() != n {
            return Err(Error::rerank_malformed(format!(
                "expected {n} positions, got {}",
                positions.len()
            )));
        }
        Ok(positions)
    }

    /// Parse `text` and map positions to candidate ids
    pub fn parse_ids(&self, text: &str, candidates: &[RerankCandidate]) -> Result<Vec<String>> {
        Ok(self
            .parse(text, candidates.len())?
            .into_iter()
            .map(|i| candidates[i].id.clone())
            .collect())
    }
}
