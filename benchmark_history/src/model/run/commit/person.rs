//!
//! A commit author or committer.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// A commit author or committer, as reported by the hosting service.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// E-mail address.
    pub email: String,
    /// Display name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Account name on the hosting service, if the e-mail is linked to one.
    pub username: Option<String>,
}

impl Person {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(email: String, name: String, username: Option<String>) -> Self {
        Self {
            email,
            name,
            username,
        }
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.username {
            Some(ref username) => write!(f, "{} (@{username})", self.name),
            None => write!(f, "{} <{}>", self.name, self.email),
        }
    }
}
