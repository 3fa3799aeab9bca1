use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum handle length accepted by Codeforces.
pub const MAX_HANDLE_LEN: usize = 24;

/// Reasons a handle is rejected before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandleError {
    #[error("Handle must not be empty")]
    Empty,

    #[error("Handle must be at most {MAX_HANDLE_LEN} characters, got {0}")]
    TooLong(usize),

    #[error("Handle contains invalid character '{0}'")]
    InvalidChar(char),
}

/// A validated Codeforces user handle.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Handle(String);

impl Handle {
    /// Validate and wrap a handle. Surrounding whitespace is trimmed.
    pub fn parse(raw: &str) -> Result<Self, HandleError> {
        let handle = raw.trim();
        if handle.is_empty() {
            return Err(HandleError::Empty);
        }
        let len = handle.chars().count();
        if len > MAX_HANDLE_LEN {
            return Err(HandleError::TooLong(len));
        }
        if let Some(c) = handle
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')))
        {
            return Err(HandleError::InvalidChar(c));
        }
        Ok(Self(handle.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Handle {
    type Err = HandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Handle {
    type Error = HandleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Handle> for String {
    fn from(h: Handle) -> Self {
        h.0
    }
}
