//! Reordering value objects

use std::fmt;

use serde::{Deserialize, Serialize};

/// What the reordering provider sees of one candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RerankCandidate {
    pub id: String,
    pub name: String,
    /// Truncated description
    pub description: String,
    /// Truncated skills
    pub skills: String,
}

/// Outcome of the reordering stage
///
/// Fallbacks are invisible in the result order but reported here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RerankOutcome {
    /// The provider order was applied
    Applied,
    /// Fewer than two candidates, nothing to reorder
    Skipped,
    /// Reordering is turned off
    Disabled,
    /// The provider missed its deadline
    TimedOut,
    /// The provider returned an error
    ProviderFailed,
    /// The provider answered with something other than a permutation
    Malformed,
}

impl RerankOutcome {
    /// Whether the input order was kept because the provider could not be used
    pub fn is_fallback(self) -> bool {
        matches!(self, Self::TimedOut | Self::ProviderFailed | Self::Malformed)
    }

    /// Snake-case label used in logs and output
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Skipped => "skipped",
            Self::Disabled => "disabled",
            Self::TimedOut => "timed_out",
            Self::ProviderFailed => "provider_failed",
            Self::Malformed => "malformed",
        }
    }
}

impl fmt::Display for RerankOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
