//! Tests for index line encoding
//!
//! These tests verify:
//! - Each encoded line is single-line JSON ending in the delimiter
//! - Decoding reports malformed lines with their line number

use evalstore::index::{decode_line, encode_line, DELIMITER};
use evalstore::{EvalRunKey, EvalStoreError};
use serde_json::json;

#[test]
fn test_encode_ends_with_single_delimiter() {
    let line = encode_line(&EvalRunKey::new("run-1", "a")).unwrap();

    assert!(line.ends_with(DELIMITER));
    assert_eq!(line.matches(DELIMITER).count(), 1);
}

#[test]
fn test_encode_escapes_embedded_newlines() {
    let key = EvalRunKey::new("run-1", "a").with_field("note", "two\nlines");
    let line = encode_line(&key).unwrap();

    assert_eq!(line.matches(DELIMITER).count(), 1);

    let decoded = decode_line(line.trim_end_matches(DELIMITER), 1).unwrap();
    assert_eq!(decoded.extra.get("note"), Some(&json!("two\nlines")));
}

#[test]
fn test_decode_valid_line() {
    let key = decode_line(r#"{"evalRunId":"run-7","actionRef":"b"}"#, 1).unwrap();

    assert_eq!(key, EvalRunKey::new("run-7", "b"));
}

#[test]
fn test_decode_invalid_json_reports_line() {
    let err = decode_line(r#"{"evalRunId":"run-7""#, 12).unwrap_err();

    match err {
        EvalStoreError::MalformedIndex { line, .. } => assert_eq!(line, 12),
        other => panic!("expected MalformedIndex, got {:?}", other),
    }
}

#[test]
fn test_decode_schema_violation_is_malformed() {
    let err = decode_line(r#"{"evalRunId":"run-7","actionRef":""}"#, 3).unwrap_err();

    assert!(err.is_malformed());
}

#[test]
fn test_decode_empty_line_is_malformed() {
    let err = decode_line("", 2).unwrap_err();

    assert!(matches!(err, EvalStoreError::MalformedIndex { line: 2, .. }));
}
