//! Raw catalog records

use serde::{Deserialize, Serialize};

/// One assessment as stored in the catalog file
///
/// Field aliases cover the column names of scraped catalog exports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, alias = "URL")]
    pub url: Option<String>,
    #[serde(default, alias = "Assessment Name", alias = "assessment_name")]
    pub name: String,
    #[serde(default, alias = "Description")]
    pub description: String,
    #[serde(
        default,
        alias = "test_type",
        alias = "type",
        alias = "Test Type",
        alias = "categoryTag"
    )]
    pub category_tag: Option<String>,
    #[serde(default, alias = "Skills")]
    pub skills: String,
    #[serde(default, alias = "Duration")]
    pub duration: Option<String>,
    #[serde(default, alias = "Difficulty")]
    pub difficulty: Option<String>,
    #[serde(default, alias = "Use Cases")]
    pub use_cases: Option<String>,
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,
}

impl CatalogRecord {
    /// Stable identifier: `id`, else `url`
    pub fn key(&self) -> Option<&str> {
        self.id
            .as_deref()
            .or(self.url.as_deref())
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Text embedded for records without a stored vector
    ///
    /// `name. description. Skills: …. Use cases: …. Type: X`, leaving out
    /// empty and `nan` parts.
    pub fn document_text(&self) -> String {
        fn present(value: &str) -> Option<&str> {
            let value = value.trim();
            (!value.is_empty() && !value.eq_ignore_ascii_case("nan")).then_some(value)
        }

        let mut parts: Vec<String> = Vec::new();
        if let Some(name) = present(&self.name) {
            parts.push(name.to_string());
        }
        if let Some(description) = present(&self.description) {
            parts.push(description.to_string());
        }
        if let Some(skills) = present(&self.skills) {
            parts.push(format!("Skills: {skills}"));
        }
        if let Some(use_cases) = self.use_cases.as_deref().and_then(present) {
            parts.push(format!("Use cases: {use_cases}"));
        }
        if let Some(tag) = self.category_tag.as_deref().and_then(present) {
            parts.push(format!("Type: {tag}"));
        }

        if parts.is_empty() {
            "assessment".to_string()
        } else {
            parts.join(". ")
        }
    }
}

/// Accepted catalog file layouts: a bare array or `{"assessments": [...]}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CatalogFile {
    Records(Vec<CatalogRecord>),
    Wrapped {
        #[serde(alias = "entries")]
        assessments: Vec<CatalogRecord>,
    },
}

impl CatalogFile {
    pub fn into_records(self) -> Vec<CatalogRecord> {
        match self {
            Self::Records(records) | Self::Wrapped {
                assessments: records,
            } => records,
        }
    }
}
