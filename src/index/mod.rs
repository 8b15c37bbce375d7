//! Index Log Module
//!
//! A single append-only text file cataloguing every known run key, so runs can
//! be listed and filtered without opening each record file.
//!
//! ## Responsibilities
//! - Append one key per successful save
//! - Read the whole log back for listing (all-or-nothing parsing)
//! - Stream the log line by line when a delete rebuilds it
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ {"evalRunId":"r1","actionRef":"a",...}\n             │
//! │ {"evalRunId":"r2","actionRef":"b",...}\n             │
//! │ ...                                                  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Every write leaves the file ending in exactly one delimiter. A crash in the
//! middle of an append can leave a partial last line; readers report it as
//! malformed rather than guessing.

mod entry;
mod reader;
mod writer;

pub use entry::{decode_line, encode_line, DELIMITER, DELIMITER_BYTE, INDEX_FILENAME};
pub use reader::{IndexLines, IndexReader};
pub use writer::{IndexWriter, RebuildStats};
