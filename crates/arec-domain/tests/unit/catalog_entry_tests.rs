//! Unit tests for the catalog entry entity and category tags

use std::str::FromStr;

use arec_domain::{CatalogEntry, CategoryTag};

#[test]
fn test_category_tag_codes() {
    assert_eq!(CategoryTag::Knowledge.code(), "K");
    assert_eq!(CategoryTag::Personality.code(), "P");
    assert_eq!(CategoryTag::Hybrid.to_string(), "H");
}

#[test]
fn test_category_tag_from_str_accepts_codes_and_words() {
    assert_eq!(CategoryTag::from_str("k").unwrap(), CategoryTag::Knowledge);
    assert_eq!(
        CategoryTag::from_str(" Personality ").unwrap(),
        CategoryTag::Personality
    );
    assert_eq!(CategoryTag::from_str("H").unwrap(), CategoryTag::Hybrid);
    assert!(CategoryTag::from_str("X").is_err());
}

#[test]
fn test_hybrid_satisfies_both_primary_categories() {
    assert!(CategoryTag::Hybrid.satisfies(CategoryTag::Knowledge));
    assert!(CategoryTag::Hybrid.satisfies(CategoryTag::Personality));
    assert!(CategoryTag::Knowledge.satisfies(CategoryTag::Knowledge));
    assert!(!CategoryTag::Knowledge.satisfies(CategoryTag::Personality));
    assert!(!CategoryTag::Personality.satisfies(CategoryTag::Knowledge));
}

#[test]
fn test_counterpart() {
    assert_eq!(
        CategoryTag::Knowledge.counterpart(),
        Some(CategoryTag::Personality)
    );
    assert_eq!(
        CategoryTag::Personality.counterpart(),
        Some(CategoryTag::Knowledge)
    );
    assert_eq!(CategoryTag::Hybrid.counterpart(), None);
}

#[test]
fn test_category_tag_serde_uses_codes() {
    let json = serde_json::to_string(&CategoryTag::Personality).expect("serialize");
    assert_eq!(json, "\"P\"");
    let tag: CategoryTag = serde_json::from_str("\"k\"").expect("deserialize");
    assert_eq!(tag, CategoryTag::Knowledge);
}

#[test]
fn test_catalog_entry_url_falls_back_to_id() {
    let mut entry = CatalogEntry::new("java-8", "Java 8", CategoryTag::Knowledge, vec![1.0]);
    assert_eq!(entry.url(), "java-8");

    entry.url = Some("https://example.com/java-8".to_string());
    assert_eq!(entry.url(), "https://example.com/java-8");
}

#[test]
fn test_catalog_entry_builders() {
    let entry = CatalogEntry::new("opq", "OPQ32r", CategoryTag::Personality, vec![0.0, 1.0])
        .with_description("Occupational personality questionnaire")
        .with_skills("teamwork, leadership")
        .with_duration("25 minutes");

    assert_eq!(entry.description, "Occupational personality questionnaire");
    assert_eq!(entry.skills, "teamwork, leadership");
    assert_eq!(entry.duration.as_deref(), Some("25 minutes"));
    assert_eq!(entry.dimensions(), 2);
}
