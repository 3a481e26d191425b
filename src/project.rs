// src/project.rs

//! Project root identifiers

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical root import path of an external dependency
///
/// Example: `github.com/pkg/errors`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectRoot(String);

impl ProjectRoot {
    /// Create a project root, rejecting empty values
    pub fn new(root: impl Into<String>) -> Result<Self> {
        let root = root.into();
        let trimmed = root.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidArgument("project root must not be empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectRoot {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProjectRoot {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ProjectRoot> for String {
    fn from(root: ProjectRoot) -> Self {
        root.0
    }
}
