//! Error types for evalstore
//!
//! Provides a unified error type for all store operations.

use thiserror::Error;

/// Result type alias using EvalStoreError
pub type Result<T> = std::result::Result<T, EvalStoreError>;

/// Unified error type for evalstore operations
#[derive(Debug, Error)]
pub enum EvalStoreError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Eval run not found: {0}")]
    NotFound(String),

    // -------------------------------------------------------------------------
    // Malformed Data
    // -------------------------------------------------------------------------
    #[error("Malformed record for eval run {id}: {reason}")]
    MalformedRecord { id: String, reason: String },

    #[error("Malformed index line {line}: {reason}")]
    MalformedIndex { line: usize, reason: String },

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid eval run: {0}")]
    InvalidRun(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl EvalStoreError {
    /// True for the "cannot delete what is not there" condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, EvalStoreError::NotFound(_))
    }

    /// True when stored data (a record file or an index line) failed to parse
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            EvalStoreError::MalformedRecord { .. } | EvalStoreError::MalformedIndex { .. }
        )
    }
}
