//! Unit tests for the error taxonomy

use std::error::Error as _;
use std::time::Duration;

use arec_domain::Error;

#[test]
fn test_validation_error_message() {
    let err = Error::validation("Query text must not be empty");
    assert!(matches!(err, Error::Validation { .. }));
    assert_eq!(
        err.to_string(),
        "Validation error: Query text must not be empty"
    );
}

#[test]
fn test_recommendation_failed_carries_cause() {
    let err = Error::recommendation_failed(Error::embedding_service("connection refused"));

    assert!(err.to_string().contains("connection refused"));
    let source = err.source().expect("source should be present");
    assert!(source.to_string().contains("Embedding service error"));
}

#[test]
fn test_rerank_errors_are_classified() {
    assert!(Error::rerank_timeout(Duration::from_secs(30)).is_rerank());
    assert!(Error::rerank_service("503").is_rerank());
    assert!(Error::rerank_malformed("missing id").is_rerank());
    assert!(!Error::IndexNotBuilt.is_rerank());
    assert!(!Error::validation("x").is_rerank());
}

#[test]
fn test_dimension_mismatch_message() {
    let err = Error::dimension_mismatch(384, 768);
    assert_eq!(err.to_string(), "Dimension mismatch: expected 384, got 768");
}

#[test]
fn test_with_source_constructors_keep_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "catalog.json");
    let err = Error::io_with_source("failed to read catalog", io);
    assert!(err.source().is_some());

    let err = Error::embedding_service_with_source("request failed", "timeout".to_string());
    assert!(err.source().is_some());
}

#[test]
fn test_from_io_error() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: Error = io.into();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_from_json_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Json { .. }));
}
