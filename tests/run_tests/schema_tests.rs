//! Tests for the run schema boundary
//!
//! These tests verify:
//! - camelCase key fields on the wire
//! - Extra key fields and payload members survive a round trip
//! - Validation failures (empty fields, unusable IDs, reserved names)

use evalstore::run::{EvalRun, EvalRunKey, SchemaError};
use serde_json::json;

// =============================================================================
// Key Tests
// =============================================================================

#[test]
fn test_key_uses_camel_case_fields() {
    let key = EvalRunKey::new("run-1", "pipeline/summarize");
    let line = key.to_json_line().unwrap();

    assert_eq!(line, r#"{"evalRunId":"run-1","actionRef":"pipeline/summarize"}"#);
}

#[test]
fn test_key_keeps_extra_fields() {
    let key = EvalRunKey::parse_json(
        r#"{"evalRunId":"run-1","actionRef":"a","createdAt":"2024-01-01","tags":["x"]}"#,
    )
    .unwrap();

    assert_eq!(key.eval_run_id, "run-1");
    assert_eq!(key.action_ref, "a");
    assert_eq!(key.extra.get("createdAt"), Some(&json!("2024-01-01")));
    assert_eq!(key.extra.get("tags"), Some(&json!(["x"])));

    let reparsed = EvalRunKey::parse_json(&key.to_json_line().unwrap()).unwrap();
    assert_eq!(reparsed, key);
}

#[test]
fn test_key_missing_field_is_rejected() {
    let err = EvalRunKey::parse_json(r#"{"evalRunId":"run-1"}"#).unwrap_err();
    assert!(matches!(err, SchemaError::Json(_)));
}

#[test]
fn test_key_not_json_is_rejected() {
    let err = EvalRunKey::parse_json("not json").unwrap_err();
    assert!(matches!(err, SchemaError::Json(_)));
}

#[test]
fn test_key_empty_id_is_rejected() {
    let err = EvalRunKey::parse_json(r#"{"evalRunId":"","actionRef":"a"}"#).unwrap_err();
    assert!(matches!(err, SchemaError::EmptyField("evalRunId")));
}

#[test]
fn test_key_empty_action_ref_is_rejected() {
    let err = EvalRunKey::new("run-1", "").validate().unwrap_err();
    assert!(matches!(err, SchemaError::EmptyField("actionRef")));
}

#[test]
fn test_key_id_with_separator_is_rejected() {
    for id in ["a/b", "a\\b", "..", "."] {
        let err = EvalRunKey::new(id, "a").validate().unwrap_err();
        assert!(matches!(err, SchemaError::UnusableId(_)), "id {:?}", id);
    }
}

#[test]
fn test_key_extra_cannot_shadow_id() {
    let key = EvalRunKey::new("run-1", "a").with_field("evalRunId", "other");
    let err = key.validate().unwrap_err();
    assert!(matches!(err, SchemaError::ReservedField("evalRunId")));
}

// =============================================================================
// Run Tests
// =============================================================================

#[test]
fn test_run_payload_is_flattened() {
    let run = EvalRun::new(EvalRunKey::new("run-1", "a"))
        .with_payload("metrics", json!({"accuracy": 0.5}));

    let value: serde_json::Value = serde_json::from_str(&run.to_json(false).unwrap()).unwrap();

    assert_eq!(
        value,
        json!({
            "key": {"evalRunId": "run-1", "actionRef": "a"},
            "metrics": {"accuracy": 0.5}
        })
    );
}

#[test]
fn test_run_parse_round_trip() {
    let run = EvalRun::new(EvalRunKey::new("run-1", "a").with_field("model", "m1"))
        .with_payload("inputs", json!([1, 2, 3]))
        .with_payload("outputs", json!({"text": "ok"}))
        .with_payload("score", 0.75);

    for pretty in [false, true] {
        let parsed = EvalRun::parse_json(&run.to_json(pretty).unwrap()).unwrap();
        assert_eq!(parsed, run);
    }
}

#[test]
fn test_run_without_key_is_rejected() {
    let err = EvalRun::parse_json(r#"{"metrics":{}}"#).unwrap_err();
    assert!(matches!(err, SchemaError::Json(_)));
}

#[test]
fn test_run_with_invalid_key_is_rejected() {
    let err = EvalRun::parse_json(r#"{"key":{"evalRunId":"","actionRef":"a"}}"#).unwrap_err();
    assert!(matches!(err, SchemaError::EmptyField("evalRunId")));
}

#[test]
fn test_run_payload_cannot_use_key_name() {
    let mut run = EvalRun::new(EvalRunKey::new("run-1", "a"));
    run.payload.insert("key".to_string(), json!("shadow"));

    let err = run.validate().unwrap_err();
    assert!(matches!(err, SchemaError::ReservedField("key")));
}
