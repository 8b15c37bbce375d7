//! Index line encoding
//!
//! One line = one compact JSON key followed by the delimiter.

use crate::error::{EvalStoreError, Result};
use crate::run::EvalRunKey;

/// Terminates every index line
pub const DELIMITER: char = '\n';

/// `DELIMITER` as it appears in the raw log bytes
pub const DELIMITER_BYTE: u8 = DELIMITER as u8;

/// File name of the index log inside the store root
pub const INDEX_FILENAME: &str = "index.txt";

/// Serialize a key into a full index line, delimiter included
pub fn encode_line(key: &EvalRunKey) -> Result<String> {
    let mut line = key
        .to_json_line()
        .map_err(|e| EvalStoreError::Serialization(e.to_string()))?;
    line.push(DELIMITER);
    Ok(line)
}

/// Parse one index line (without its delimiter)
///
/// `line_no` is 1-based and only used for error reporting. Bytes that are not
/// UTF-8 are malformed like any other non-JSON content.
pub fn decode_line(line: impl AsRef<[u8]>, line_no: usize) -> Result<EvalRunKey> {
    EvalRunKey::parse_slice(line.as_ref()).map_err(|e| EvalStoreError::MalformedIndex {
        line: line_no,
        reason: e.to_string(),
    })
}
