//! Index Writer
//!
//! Appends keys to the index log and rebuilds it when entries are removed.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::SyncPolicy;
use crate::error::Result;
use crate::run::EvalRunKey;

use super::{decode_line, encode_line, IndexLines, DELIMITER_BYTE};

/// Suffix of the fresh file a rebuild writes before swapping it in
const REBUILD_SUFFIX: &str = "rebuild";

/// Outcome of a rebuild pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RebuildStats {
    /// Lines copied into the new log
    pub retained: usize,

    /// Lines dropped
    pub removed: usize,
}

/// Writes to the index log
///
/// Holds no open handle: every append opens the log in append mode, so the
/// writer is shareable behind `&self` without any lock.
pub struct IndexWriter {
    path: PathBuf,
    sync_policy: SyncPolicy,
}

impl IndexWriter {
    /// Open the index log, creating an empty one if missing
    ///
    /// An existing log is never truncated.
    pub fn open(path: &Path, sync_policy: SyncPolicy) -> Result<Self> {
        OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            sync_policy,
        })
    }

    /// Append one key line
    pub fn append(&self, key: &EvalRunKey) -> Result<()> {
        let line = encode_line(key)?;

        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        // Single write call for the whole line, delimiter included
        file.write_all(line.as_bytes())?;

        if self.sync_policy.should_sync() {
            file.sync_data()?;
        }
        Ok(())
    }

    /// Rewrite the log keeping only the keys `keep` accepts
    ///
    /// Steps:
    /// 1. Stream `lines` from the current log
    /// 2. Copy each retained line (verbatim) plus delimiter into a fresh file
    /// 3. Rename the fresh file over the log
    ///
    /// Any append landing on the old log between step 1 and step 3 is lost.
    pub fn rebuild<F>(&self, mut lines: IndexLines, mut keep: F) -> Result<RebuildStats>
    where
        F: FnMut(&EvalRunKey) -> bool,
    {
        let fresh_path = self.fresh_path();
        let file = File::create(&fresh_path)?;

        let stats = match self.copy_retained(&mut lines, BufWriter::new(file), &mut keep) {
            Ok(stats) => stats,
            Err(e) => {
                let _ = fs::remove_file(&fresh_path);
                return Err(e);
            }
        };

        // Release the old log before swapping the new one in
        drop(lines);
        if let Err(e) = fs::rename(&fresh_path, &self.path) {
            let _ = fs::remove_file(&fresh_path);
            return Err(e.into());
        }
        Ok(stats)
    }

    fn copy_retained<F>(
        &self,
        lines: &mut IndexLines,
        mut out: BufWriter<File>,
        keep: &mut F,
    ) -> Result<RebuildStats>
    where
        F: FnMut(&EvalRunKey) -> bool,
    {
        let mut stats = RebuildStats::default();

        while let Some(line) = lines.next() {
            let line = line?;
            let key = decode_line(&line, lines.line_no())?;

            if keep(&key) {
                out.write_all(&line)?;
                out.write_all(&[DELIMITER_BYTE])?;
                stats.retained += 1;
            } else {
                stats.removed += 1;
            }
        }

        out.flush()?;
        if self.sync_policy.should_sync() {
            out.get_ref().sync_all()?;
        }
        Ok(stats)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn fresh_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".");
        name.push(REBUILD_SUFFIX);
        self.path.with_file_name(name)
    }
}
