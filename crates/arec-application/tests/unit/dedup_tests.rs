//! Tests for candidate deduplication

use arec_application::domain_services::dedupe;
use arec_domain::CategoryTag::{Knowledge, Personality};

use crate::test_utils::{ids, scored};

#[test]
fn test_first_occurrence_wins() {
    let candidates = vec![
        scored("a", Knowledge, 0.9),
        scored("b", Personality, 0.8),
        scored("a", Knowledge, 0.95),
        scored("c", Knowledge, 0.7),
        scored("b", Personality, 0.1),
    ];

    let out = dedupe(candidates);
    assert_eq!(ids(&out), vec!["a", "b", "c"]);
    assert!((out[0].similarity - 0.9).abs() < f32::EPSILON);
}

#[test]
fn test_idempotent() {
    let candidates = vec![
        scored("a", Knowledge, 0.9),
        scored("a", Knowledge, 0.8),
        scored("b", Knowledge, 0.7),
    ];
    let once = dedupe(candidates);
    let twice = dedupe(once.clone());
    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn test_empty_input() {
    assert!(dedupe(Vec::new()).is_empty());
}
