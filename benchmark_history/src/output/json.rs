//!
//! Plain JSON output format.
//!

use crate::model::history::History;

///
/// The history object as plain JSON, without the dashboard script wrapper.
///
#[derive(Default)]
pub struct Json {
    /// Serialized JSON.
    pub content: String,
}

impl From<&History> for Json {
    fn from(history: &History) -> Self {
        let content = serde_json::to_string_pretty(history).expect("Always valid");
        Self { content }
    }
}
