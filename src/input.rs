//! Line-delimited JSON session parsing
//!
//! Each input line is one JSON array of operation objects and forms an
//! independent session. Blank lines are skipped.

use crate::error::{CapitalGainsError, Result};
use crate::model::Operation;

/// Parse one line into a session's operation list.
pub fn parse_session(line: &str) -> Result<Vec<Operation>> {
    serde_json::from_str(line)
        .map_err(|e| CapitalGainsError::InvalidInput(format!("{}: {}", line.trim(), e)).into())
}

/// Split raw input into sessions, one per non-blank line.
pub fn parse_sessions(input: &str) -> Result<Vec<Vec<Operation>>> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_session)
        .collect()
}
