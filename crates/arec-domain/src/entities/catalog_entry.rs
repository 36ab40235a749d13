//! Catalog entry entity and category tags

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Category of an assessment
///
/// `Knowledge` and `Personality` are the two primary categories used by the
/// balancing policy. `Hybrid` assessments measure both and count toward
/// either category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryTag {
    /// Knowledge and skills (`K`)
    #[serde(rename = "K", alias = "k")]
    Knowledge,
    /// Personality and behavior (`P`)
    #[serde(rename = "P", alias = "p")]
    Personality,
    /// Both knowledge and personality (`H`)
    #[serde(rename = "H", alias = "h")]
    Hybrid,
}

impl CategoryTag {
    /// The two categories the balancer enforces minimums for
    pub const PRIMARY: [CategoryTag; 2] = [CategoryTag::Knowledge, CategoryTag::Personality];

    /// Single-letter code used in catalogs and output
    pub fn code(self) -> &'static str {
        match self {
            Self::Knowledge => "K",
            Self::Personality => "P",
            Self::Hybrid => "H",
        }
    }

    /// Whether an entry with this tag counts toward `target`
    pub fn satisfies(self, target: CategoryTag) -> bool {
        self == target || self == Self::Hybrid
    }

    /// The other primary category; hybrid has none
    pub fn counterpart(self) -> Option<CategoryTag> {
        match self {
            Self::Knowledge => Some(Self::Personality),
            Self::Personality => Some(Self::Knowledge),
            Self::Hybrid => None,
        }
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CategoryTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "k" | "knowledge" => Ok(Self::Knowledge),
            "p" | "personality" => Ok(Self::Personality),
            "h" | "hybrid" => Ok(Self::Hybrid),
            other => Err(Error::invalid_argument(format!(
                "Unknown category tag '{other}'. Expected K, P or H"
            ))),
        }
    }
}

/// Entity: Catalog Entry
///
/// One assessment of the catalog. Entries are created once while the index is
/// built and never change afterwards; pipeline stages share them through
/// `Arc` instead of copying.
///
/// ## Business Rules
///
/// - `id` is the identity key used for deduplication (typically the URL)
/// - `embedding` is L2-normalized and has the dimensionality of the index
///
/// ## Example
///
/// ```rust
/// use arec_domain::{CatalogEntry, CategoryTag};
///
/// let entry = CatalogEntry::new(
///     "https://example.com/java-8",
///     "Java 8 (New)",
///     CategoryTag::Knowledge,
///     vec![1.0, 0.0],
/// );
/// assert_eq!(entry.url(), "https://example.com/java-8");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Stable identity, usually the assessment URL
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Category classification
    pub category_tag: CategoryTag,
    /// Measured skills, free text
    #[serde(default)]
    pub skills: String,
    /// Typical completion time
    #[serde(default)]
    pub duration: Option<String>,
    /// Difficulty or job level
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Typical use cases
    #[serde(default)]
    pub use_cases: Option<String>,
    /// Canonical URL when it differs from `id`
    #[serde(default)]
    pub url: Option<String>,
    /// L2-normalized embedding vector
    pub embedding: Vec<f32>,
}

impl CatalogEntry {
    /// Create an entry with the required fields; optional fields start empty
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category_tag: CategoryTag,
        embedding: Vec<f32>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category_tag,
            skills: String::new(),
            duration: None,
            difficulty: None,
            use_cases: None,
            url: None,
            embedding,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the skills text
    pub fn with_skills(mut self, skills: impl Into<String>) -> Self {
        self.skills = skills.into();
        self
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// URL shown to callers; falls back to the id
    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or(&self.id)
    }

    /// Dimensionality of the stored embedding
    pub fn dimensions(&self) -> usize {
        self.embedding.len()
    }
}
