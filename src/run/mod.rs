//! Run Module
//!
//! The schema boundary of the store: what a run and its key look like.
//!
//! ## Responsibilities
//! - Define `EvalRunKey` (identity + catalog fields) and `EvalRun` (full record)
//! - Parse-and-validate JSON into either type ("parses or fails")
//! - Keep every field the store does not interpret, untouched
//!
//! ## Record Shape
//! ```text
//! {
//!   "key": { "evalRunId": "...", "actionRef": "...", ...otherKeyFields },
//!   ...payload (metrics, inputs, outputs)
//! }
//! ```

mod validate;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use validate::SchemaError;

/// Identifies a run; this is what the index log catalogs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvalRunKey {
    /// Unique run ID, also the record file stem
    pub eval_run_id: String,

    /// The action/pipeline this run evaluated
    pub action_ref: String,

    /// Any other key fields, carried through verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EvalRunKey {
    pub fn new(eval_run_id: impl Into<String>, action_ref: impl Into<String>) -> Self {
        Self {
            eval_run_id: eval_run_id.into(),
            action_ref: action_ref.into(),
            extra: Map::new(),
        }
    }

    /// Attach an additional key field
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Parse and validate a serialized key
    pub fn parse_json(text: &str) -> Result<Self, SchemaError> {
        Self::parse_slice(text.as_bytes())
    }

    /// Like `parse_json`, for raw bytes; invalid UTF-8 is a JSON error
    pub fn parse_slice(bytes: &[u8]) -> Result<Self, SchemaError> {
        let key: EvalRunKey = serde_json::from_slice(bytes)?;
        key.validate()?;
        Ok(key)
    }

    pub fn validate(&self) -> Result<(), SchemaError> {
        validate::check_key(self)
    }

    /// Compact single-line JSON, as stored in the index log
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// A full evaluation run record
///
/// The payload is opaque to the store: whatever sits next to `key` in the
/// record is written and read back as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalRun {
    pub key: EvalRunKey,

    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl EvalRun {
    pub fn new(key: EvalRunKey) -> Self {
        Self {
            key,
            payload: Map::new(),
        }
    }

    /// Attach a payload member (metrics, inputs, outputs, ...)
    pub fn with_payload(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(name.into(), value.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.key.eval_run_id
    }

    /// Parse and validate a serialized run
    pub fn parse_json(text: &str) -> Result<Self, SchemaError> {
        Self::parse_slice(text.as_bytes())
    }

    /// Like `parse_json`, for raw bytes; invalid UTF-8 is a JSON error
    pub fn parse_slice(bytes: &[u8]) -> Result<Self, SchemaError> {
        let run: EvalRun = serde_json::from_slice(bytes)?;
        run.validate()?;
        Ok(run)
    }

    pub fn validate(&self) -> Result<(), SchemaError> {
        validate::check_run(self)
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
