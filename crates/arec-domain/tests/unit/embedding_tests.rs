//! Unit tests for embedding value objects

use arec_domain::Embedding;
use arec_domain::value_objects::{l2_norm, normalize_l2};

#[test]
fn test_embedding_new_tracks_dimensions() {
    let embedding = Embedding::new(vec![0.1, 0.2, 0.3], "null");
    assert_eq!(embedding.dimensions, 3);
    assert_eq!(embedding.model, "null");
}

#[test]
fn test_normalize_produces_unit_vector() {
    let mut vector = vec![3.0, 4.0];
    let norm = normalize_l2(&mut vector);

    assert!((norm - 5.0).abs() < 1e-6);
    assert!((l2_norm(&vector) - 1.0).abs() < 1e-6);
    assert!((vector[0] - 0.6).abs() < 1e-6);
}

#[test]
fn test_normalize_leaves_zero_vector_alone() {
    let mut embedding = Embedding::new(vec![0.0, 0.0], "null");
    assert!(embedding.is_zero());
    assert_eq!(embedding.normalize(), 0.0);
    assert_eq!(embedding.vector, vec![0.0, 0.0]);
}
