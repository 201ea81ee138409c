// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

pub const KEY_MAX_LEN: usize = 64;

fn normalize_key(kind: &str, input: &str) -> Result<String, ValidationError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ValidationError(format!("{kind} must not be empty")));
    }
    if s.len() > KEY_MAX_LEN {
        return Err(ValidationError(format!(
            "{kind} exceeds max length {KEY_MAX_LEN}"
        )));
    }
    if s.contains('/') || s.chars().any(char::is_control) {
        return Err(ValidationError(format!(
            "{kind} must be a single path segment"
        )));
    }
    Ok(s.to_lowercase())
}

/// Numeric id or name of a record, lowercased the way the upstream expects it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct RecordKey(String);

impl RecordKey {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        normalize_key("record identifier", input).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.0.chars().all(|c| c.is_ascii_digit())
    }
}

impl Display for RecordKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct TypeName(String);

impl TypeName {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        normalize_key("type name", input).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TypeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
