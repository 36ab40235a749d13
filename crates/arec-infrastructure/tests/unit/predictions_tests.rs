//! Tests for query and prediction files

use std::io::Write;

use arec_application::domain_services::Prediction;
use arec_domain::error::Error;
use arec_infrastructure::predictions::{read_queries, write_predictions};

fn csv_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write");
    file
}

#[test]
fn test_query_column_is_found_by_name() {
    let file = csv_file("id,Query\n1,Java developer\n2,\"Sales lead, remote\"\n");
    let queries = read_queries(file.path()).expect("queries");
    assert_eq!(queries, vec!["Java developer", "Sales lead, remote"]);
}

#[test]
fn test_first_column_is_used_without_a_known_header() {
    let file = csv_file("prompt,notes\nanalyst,x\nengineer,y\n");
    let queries = read_queries(file.path()).expect("queries");
    assert_eq!(queries, vec!["analyst", "engineer"]);
}

#[test]
fn test_missing_queries_file_is_an_io_error() {
    let result = read_queries(std::path::Path::new("/no/such/queries.csv"));
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_predictions_are_written_one_row_per_url() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("predictions.csv");
    let predictions = vec![
        Prediction {
            query: "Java developer".to_string(),
            urls: vec!["u1".to_string(), "u2".to_string()],
            error: None,
        },
        Prediction {
            query: "Sales lead, remote".to_string(),
            urls: Vec::new(),
            error: Some("offline".to_string()),
        },
    ];

    let rows = write_predictions(&path, &predictions).expect("write");

    assert_eq!(rows, 3);
    let written = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(
        written,
        "Query,Assessment_url\nJava developer,u1\nJava developer,u2\n\"Sales lead, remote\",\n"
    );
}
