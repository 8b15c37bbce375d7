//! Tests for list queries
//!
//! These tests verify:
//! - Filter matching is exact and case-sensitive
//! - Query/result JSON shapes

use evalstore::{EvalRunKey, ListQuery, ListResult};
use serde_json::json;

#[test]
fn test_all_matches_everything() {
    let query = ListQuery::all();

    assert!(query.matches(&EvalRunKey::new("r1", "a")));
    assert!(query.matches(&EvalRunKey::new("r2", "b")));
}

#[test]
fn test_action_ref_is_exact_and_case_sensitive() {
    let query = ListQuery::action_ref("Build");

    assert!(query.matches(&EvalRunKey::new("r1", "Build")));
    assert!(!query.matches(&EvalRunKey::new("r2", "build")));
    assert!(!query.matches(&EvalRunKey::new("r3", "Build2")));
}

#[test]
fn test_filter_without_action_ref_matches_everything() {
    let query: ListQuery = serde_json::from_value(json!({"filter": {}})).unwrap();

    assert!(query.matches(&EvalRunKey::new("r1", "anything")));
}

#[test]
fn test_query_json_shape() {
    let query: ListQuery = serde_json::from_value(json!({"filter": {"actionRef": "a"}})).unwrap();

    assert_eq!(query, ListQuery::action_ref("a"));
    assert_eq!(serde_json::to_value(ListQuery::all()).unwrap(), json!({}));
}

#[test]
fn test_result_json_shape() {
    let result = ListResult {
        eval_run_keys: vec![EvalRunKey::new("r1", "a")],
    };

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({"evalRunKeys": [{"evalRunId": "r1", "actionRef": "a"}]})
    );
    assert_eq!(result.ids(), vec!["r1"]);
    assert_eq!(result.len(), 1);
    assert!(!result.is_empty());
}
