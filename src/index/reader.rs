//! Index Reader
//!
//! Reads the index log, either whole (listing) or lazily line by line (rebuild).

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Split};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::run::EvalRunKey;

use super::{decode_line, DELIMITER_BYTE};

/// Reads keys from the index log
pub struct IndexReader {
    path: PathBuf,
}

impl IndexReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read and parse every key, in append order
    ///
    /// An empty log yields an empty vec. Otherwise exactly one trailing
    /// delimiter is stripped and the rest is split on the delimiter; a line
    /// that does not parse fails the whole read.
    pub fn read_keys(&self) -> Result<Vec<EvalRunKey>> {
        let bytes = fs::read(&self.path)?;
        if bytes.is_empty() {
            return Ok(Vec::new());
        }

        let body = bytes.strip_suffix(&[DELIMITER_BYTE]).unwrap_or(&bytes);
        body.split(|&b| b == DELIMITER_BYTE)
            .enumerate()
            .map(|(i, line)| decode_line(line, i + 1))
            .collect()
    }

    /// Lazy sequence of raw line bytes (delimiters removed)
    pub fn lines(&self) -> Result<IndexLines> {
        let file = File::open(&self.path)?;
        Ok(IndexLines {
            lines: BufReader::new(file).split(DELIMITER_BYTE),
            line_no: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Finite, non-restartable iterator over index lines
///
/// Holds one buffered line at a time, so a rebuild never needs the whole
/// log in memory.
pub struct IndexLines {
    lines: Split<BufReader<File>>,
    line_no: usize,
}

impl IndexLines {
    /// 1-based number of the line most recently returned (0 before the first)
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

impl Iterator for IndexLines {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.line_no += 1;
        Some(line.map_err(Into::into))
    }
}
