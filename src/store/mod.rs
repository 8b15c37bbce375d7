//! Store Module
//!
//! The storage engine proper: record files plus the index log under one root.
//!
//! ## Responsibilities
//! - Open (or create) the root directory and its index log
//! - Save / load / list / delete runs
//! - Keep the index log in step with record files on the happy path
//!
//! ## Directory Layout
//! ```text
//! {root}/
//!   ├── index.txt           (one JSON key + '\n' per save)
//!   ├── {evalRunId}.json    (full run document)
//!   └── ...
//! ```

mod engine;
mod query;

pub use engine::EvalRunStore;
pub use query::{ListFilter, ListQuery, ListResult};
