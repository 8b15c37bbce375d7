//! Run validation
//!
//! Checks applied after JSON decoding succeeds.

use thiserror::Error;

use super::{EvalRun, EvalRunKey};

/// Why a document is not a valid run or key
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("evalRunId {0:?} cannot be used as a file name")]
    UnusableId(String),

    #[error("field {0:?} is reserved for the run key")]
    ReservedField(&'static str),
}

pub(super) fn check_key(key: &EvalRunKey) -> Result<(), SchemaError> {
    if key.eval_run_id.is_empty() {
        return Err(SchemaError::EmptyField("evalRunId"));
    }
    if key.action_ref.is_empty() {
        return Err(SchemaError::EmptyField("actionRef"));
    }
    if !is_file_stem(&key.eval_run_id) {
        return Err(SchemaError::UnusableId(key.eval_run_id.clone()));
    }
    for reserved in ["evalRunId", "actionRef"] {
        if key.extra.contains_key(reserved) {
            return Err(SchemaError::ReservedField(reserved));
        }
    }
    Ok(())
}

pub(super) fn check_run(run: &EvalRun) -> Result<(), SchemaError> {
    // A flattened "key" member would shadow the real key on the way back in
    if run.payload.contains_key("key") {
        return Err(SchemaError::ReservedField("key"));
    }
    check_key(&run.key)
}

/// Only rejects what can never name a single file in the root directory.
/// Anything finer-grained is the caller's ID scheme.
fn is_file_stem(id: &str) -> bool {
    id != "."
        && id != ".."
        && !id.contains(|c: char| c == '/' || c == '\\' || c == '\0')
}
