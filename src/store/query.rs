//! List queries and results

use serde::{Deserialize, Serialize};

use crate::run::EvalRunKey;

/// Optional narrowing of a `list` call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<ListFilter>,
}

/// Field filters; an unset field matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_ref: Option<String>,
}

impl ListQuery {
    /// No filter: every indexed key
    pub fn all() -> Self {
        Self::default()
    }

    /// Keys whose `actionRef` equals `action_ref` exactly
    pub fn action_ref(action_ref: impl Into<String>) -> Self {
        Self {
            filter: Some(ListFilter {
                action_ref: Some(action_ref.into()),
            }),
        }
    }

    pub fn matches(&self, key: &EvalRunKey) -> bool {
        match &self.filter {
            Some(ListFilter {
                action_ref: Some(action_ref),
            }) => key.action_ref == *action_ref,
            _ => true,
        }
    }
}

/// Keys returned by `list`, oldest append first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResult {
    pub eval_run_keys: Vec<EvalRunKey>,
}

impl ListResult {
    pub fn len(&self) -> usize {
        self.eval_run_keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.eval_run_keys.is_empty()
    }

    /// Run IDs in result order (duplicates kept)
    pub fn ids(&self) -> Vec<&str> {
        self.eval_run_keys
            .iter()
            .map(|k| k.eval_run_id.as_str())
            .collect()
    }
}
