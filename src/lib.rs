//! # evalstore
//!
//! A minimal on-disk store for evaluation run records:
//! - One JSON record file per run, named after its run ID
//! - An append-only index log of run keys for listing and filtering
//! - Index rebuild on delete, streamed line by line
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Caller (CLI, server, tests)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ save / load / list / delete
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      EvalRunStore                            │
//! │               (no locks, no open handles)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ Record Files│          │  Index Log  │
//!   │ {id}.json   │          │ (append +   │
//!   │             │          │  rebuild)   │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod run;
pub mod index;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{EvalStoreError, Result};
pub use config::{Config, SyncPolicy};
pub use run::{EvalRun, EvalRunKey, SchemaError};
pub use store::{EvalRunStore, ListFilter, ListQuery, ListResult};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of evalstore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
