// User Records
// Identity and payload types for users held by the user service

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Identifier assigned by the user service
///
/// The service may hand out numeric or string ids, so both are accepted
/// and echoed back unchanged. Two ids are equal when their textual forms
/// match, so `Number(7)` equals `Text("7")` but not `Text("007")`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(u64),
    Text(String),
}

impl UserId {
    /// The id as it appears in route paths and service URLs
    pub fn as_key(&self) -> Cow<'_, str> {
        match self {
            UserId::Number(n) => Cow::Owned(n.to_string()),
            UserId::Text(s) => Cow::Borrowed(s),
        }
    }
}

impl PartialEq for UserId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (UserId::Number(a), UserId::Number(b)) => a == b,
            _ => self.as_key() == other.as_key(),
        }
    }
}

impl Eq for UserId {}

impl Hash for UserId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_key().hash(state);
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{}", n),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for UserId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(UserId::from(s))
    }
}

impl From<u64> for UserId {
    fn from(n: u64) -> Self {
        UserId::Number(n)
    }
}

/// Text taken from a path segment is kept verbatim
impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        UserId::Text(s.to_string())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        UserId::Text(s)
    }
}

/// A single user as returned by the user service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    /// Avatar image reference (URL or path)
    #[serde(default)]
    pub image: String,
}

impl UserRecord {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
        }
    }
}

/// Body sent when creating or updating a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub image: String,
}

impl UserDraft {
    pub fn into_record(self, id: UserId) -> UserRecord {
        UserRecord {
            id,
            name: self.name,
            image: self.image,
        }
    }
}
