//! Label Value Object
//!
//! A short tag attached to a code block by an annotation comment.

use serde::Serialize;
use std::fmt;

const WILDCARD: &str = "__wildcard__";
const ANONYMOUS: &str = "__anonymous__";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Matches every code block, whatever its labels.
    pub fn wildcard() -> Self {
        Self(WILDCARD.to_string())
    }

    /// Stands in for "no label at all".
    pub fn anonymous() -> Self {
        Self(ANONYMOUS.to_string())
    }

    pub fn is_wildcard(&self) -> bool {
        self.0 == WILDCARD
    }

    pub fn is_anonymous(&self) -> bool {
        self.0 == ANONYMOUS
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Self(value)
    }
}
