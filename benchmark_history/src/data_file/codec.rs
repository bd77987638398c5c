//!
//! The dashboard data script codec.
//!

use crate::model::history::History;

/// The global variable assignment the dashboard script starts with.
pub const ASSIGNMENT_PREFIX: &str = "window.BENCHMARK_DATA = ";

///
/// Dashboard data script decoding error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The script contains no data.
    #[error("the data script is empty")]
    Empty,
    /// The script does not start with the global variable assignment.
    #[error("the data script does not start with `window.BENCHMARK_DATA = `")]
    MissingAssignment,
    /// The assigned object is not a valid history.
    #[error("the assigned object is invalid: {0}")]
    Json(#[from] serde_json::Error),
}

///
/// Encodes the history as a dashboard data script.
///
/// The object is indented with two spaces and the script has no trailing
/// newline, which is byte-compatible with the scripts written by the
/// benchmark publishing action.
///
pub fn encode(history: &History) -> String {
    let json = serde_json::to_string_pretty(history).expect("Always valid");
    let mut script = String::with_capacity(ASSIGNMENT_PREFIX.len() + json.len());
    script.push_str(ASSIGNMENT_PREFIX);
    script.push_str(json.as_str());
    script
}

///
/// Decodes a dashboard data script.
///
/// Leading whitespace and a trailing semicolon are tolerated.
///
pub fn decode(script: &str) -> Result<History, Error> {
    let script = script.trim();
    if script.is_empty() {
        return Err(Error::Empty);
    }
    let json = script
        .strip_prefix(ASSIGNMENT_PREFIX.trim_end())
        .ok_or(Error::MissingAssignment)?;
    let json = json.trim_end_matches(';');
    Ok(serde_json::from_str(json)?)
}
