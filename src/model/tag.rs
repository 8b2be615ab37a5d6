// File: ./src/model/tag.rs
use crate::error::{CommandError, CommandResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A task label. Only ASCII letters and digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tag(String);

impl Tag {
    /// Validates a raw tag value.
    ///
    /// Values carried over from older command syntax start with a '/'; it is
    /// dropped before validation.
    pub fn parse(raw: &str) -> CommandResult<Self> {
        let name = raw.strip_prefix('/').unwrap_or(raw).trim();
        if !Self::is_valid_tag_name(name) {
            return Err(CommandError::InvalidTagName);
        }
        Ok(Self(name.to_string()))
    }

    pub fn is_valid_tag_name(name: &str) -> bool {
        !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}
