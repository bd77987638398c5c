//!
//! The commit a benchmark run was recorded for.
//!

pub mod person;

use serde::Deserialize;
use serde::Serialize;

use self::person::Person;

///
/// The commit a benchmark run was recorded for.
///
/// Push events carry `distinct` and `tree_id`, while runs recorded for pull
/// requests do not, so both are optional and omitted when absent.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// The commit author.
    pub author: Person,
    /// The commit committer.
    pub committer: Person,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Whether the commit was pushed for the first time.
    pub distinct: Option<bool>,
    /// Full commit hash.
    pub id: String,
    /// Commit message.
    pub message: String,
    /// RFC 3339 commit timestamp.
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Hash of the commit tree.
    pub tree_id: Option<String>,
    /// Commit page URL.
    pub url: String,
}

impl Commit {
    /// The length of an abbreviated commit hash.
    pub const SHORT_ID_LENGTH: usize = 7;

    ///
    /// Returns the abbreviated commit hash.
    ///
    pub fn short_id(&self) -> &str {
        self.id
            .get(..Self::SHORT_ID_LENGTH)
            .unwrap_or(self.id.as_str())
    }

    ///
    /// Returns the first line of the commit message.
    ///
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }
}
