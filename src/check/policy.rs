// src/check/policy.rs

//! Classification policy for constraints.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// When a declared constraint counts as ineffectual
///
/// Ignore directives always use the unreached rule: an ignore for a path
/// nothing imports ignores nothing. Constraints have historically been
/// judged the other way round, so both readings are available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintPolicy {
    /// Flag constraints whose root is not in the import set
    #[default]
    Unreached,
    /// Flag constraints whose root is in the import set (legacy behavior)
    Reached,
}

impl ConstraintPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unreached => "unreached",
            Self::Reached => "reached",
        }
    }

    /// Whether a constraint is ineffectual given whether its root is imported
    pub fn is_ineffectual(&self, imported: bool) -> bool {
        match self {
            Self::Unreached => !imported,
            Self::Reached => imported,
        }
    }
}

impl fmt::Display for ConstraintPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConstraintPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "unreached" => Ok(Self::Unreached),
            "reached" => Ok(Self::Reached),
            other => Err(Error::UnknownPolicy(other.to_string())),
        }
    }
}
