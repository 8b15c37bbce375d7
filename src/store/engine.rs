//! Eval Run Store
//!
//! Coordinates the record files and the index log.
//!
//! ## Responsibilities
//! - Bootstrap the root directory and index log on open
//! - Write the record, then append its key (two steps, not atomic)
//! - Remove the record, then rebuild the index without its key
//! - Surface malformed stored data instead of skipping it

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{EvalStoreError, Result};
use crate::index::{IndexReader, IndexWriter, INDEX_FILENAME};
use crate::run::EvalRun;

use super::{ListQuery, ListResult};

/// Handle to a store rooted at one directory
///
/// ## Concurrency Model: none
///
/// Every operation takes `&self` and holds no lock; the handle keeps no file
/// open between calls. Operations may be interleaved by callers, with these
/// accepted outcomes:
/// - Concurrent saves both land in the index, in either order
/// - A save racing a delete's rebuild can lose its index line
///
/// Callers needing multi-writer safety serialize access themselves.
///
/// ## Crash States
/// - Record written, key not appended: run is loadable but not listed
/// - Partial final index line: `list` fails until the log is repaired
pub struct EvalRunStore {
    /// Store configuration
    config: Config,

    /// Append/rebuild side of the index log
    index: IndexWriter,
}

impl EvalRunStore {
    // =========================================================================
    // Internal Path Constants
    // =========================================================================
    const RECORD_EXTENSION: &'static str = "json";

    /// Open or create a store with the given config
    ///
    /// On open:
    /// 1. Create the root directory (recursively) if missing
    /// 2. Create an empty index log if missing
    /// 3. Ready for I/O
    pub fn open(config: Config) -> Result<Self> {
        if config.root_dir.as_os_str().is_empty() {
            return Err(EvalStoreError::Config(
                "root directory must not be empty".to_string(),
            ));
        }

        fs::create_dir_all(&config.root_dir)?;

        let index_path = config.root_dir.join(INDEX_FILENAME);
        let index = IndexWriter::open(&index_path, config.sync_policy)?;

        info!(root = %config.root_dir.display(), "eval run store opened");

        Ok(Self { config, index })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified root directory
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().root_dir(path).build();
        Self::open(config)
    }

    /// Persist a run
    ///
    /// Steps:
    /// 1. Write `{evalRunId}.json`, replacing any previous record
    /// 2. Append the run's key to the index log
    ///
    /// Saving the same ID twice leaves two index lines until a delete
    /// collapses them.
    pub fn save(&self, run: &EvalRun) -> Result<()> {
        run.validate()
            .map_err(|e| EvalStoreError::InvalidRun(e.to_string()))?;

        let id = run.id();
        debug!(eval_run_id = id, action_ref = %run.key.action_ref, "saving eval run");

        // Step 1: Record file (last writer wins)
        let json = run
            .to_json(self.config.pretty_records)
            .map_err(|e| EvalStoreError::Serialization(e.to_string()))?;
        self.write_record(&self.record_path(id), json.as_bytes())?;

        // Step 2: Index line
        self.index.append(&run.key)?;

        debug!(eval_run_id = id, "eval run saved");
        Ok(())
    }

    /// Load a run by ID
    ///
    /// Returns:
    /// - `Ok(Some(run))` — record present and valid
    /// - `Ok(None)` — no record file for this ID
    /// - `Err(MalformedRecord)` — record present but not a valid run
    pub fn load(&self, eval_run_id: &str) -> Result<Option<EvalRun>> {
        debug!(eval_run_id, "loading eval run");

        let bytes = match fs::read(self.record_path(eval_run_id)) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(eval_run_id, "eval run not found");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        EvalRun::parse_slice(&bytes)
            .map(Some)
            .map_err(|e| EvalStoreError::MalformedRecord {
                id: eval_run_id.to_string(),
                reason: e.to_string(),
            })
    }

    /// List indexed keys, optionally filtered, in append order
    ///
    /// One malformed index line fails the whole call.
    pub fn list(&self, query: &ListQuery) -> Result<ListResult> {
        debug!(filter = ?query.filter, "listing eval runs");

        let keys = IndexReader::new(self.index.path()).read_keys()?;
        let eval_run_keys: Vec<_> = keys.into_iter().filter(|k| query.matches(k)).collect();

        debug!(count = eval_run_keys.len(), "eval runs listed");
        Ok(ListResult { eval_run_keys })
    }

    /// Delete a run
    ///
    /// Steps:
    /// 1. Remove the record file (`NotFound` if there is none)
    /// 2. Rebuild the index log without any line for this ID
    pub fn delete(&self, eval_run_id: &str) -> Result<()> {
        debug!(eval_run_id, "deleting eval run");

        // Step 1: Record file
        match fs::remove_file(self.record_path(eval_run_id)) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(EvalStoreError::NotFound(eval_run_id.to_string()));
            }
            Err(e) => return Err(e.into()),
        }

        // Step 2: Index rebuild
        let lines = IndexReader::new(self.index.path()).lines()?;
        let stats = self
            .index
            .rebuild(lines, |key| key.eval_run_id != eval_run_id)
            .map_err(|e| {
                warn!(eval_run_id, error = %e, "record removed but index rebuild failed");
                e
            })?;

        debug!(
            eval_run_id,
            removed = stats.removed,
            retained = stats.retained,
            "eval run deleted"
        );
        Ok(())
    }

    /// Whether a record file exists for this ID (no parsing)
    pub fn contains(&self, eval_run_id: &str) -> Result<bool> {
        Ok(self.record_path(eval_run_id).try_exists()?)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the root directory path
    pub fn root_dir(&self) -> &Path {
        &self.config.root_dir
    }

    /// Get the index log path
    pub fn index_path(&self) -> &Path {
        self.index.path()
    }

    /// Path of the record file for an ID (whether or not it exists)
    pub fn record_path(&self, eval_run_id: &str) -> PathBuf {
        self.config
            .root_dir
            .join(format!("{}.{}", eval_run_id, Self::RECORD_EXTENSION))
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn write_record(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(bytes)?;
        if self.config.sync_policy.should_sync() {
            file.sync_all()?;
        }
        Ok(())
    }
}
