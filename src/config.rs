// src/config.rs

//! Audit configuration
//!
//! Optional TOML file tuning how rules are judged:
//!
//! ```toml
//! constraint_policy = "unreached"
//! extra_std_lib = ["appengine", "example.com/vendored/runtime"]
//! ```

use crate::check::ConstraintPolicy;
use crate::error::Result;
use crate::pkgtree::is_std_lib;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Default location of the audit configuration, relative to the project
pub const DEFAULT_CONFIG_PATH: &str = "ruleaudit.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuditConfig {
    /// How declared constraints are classified
    pub constraint_policy: ConstraintPolicy,

    /// Additional path prefixes treated as standard library
    pub extra_std_lib: Vec<String>,
}

impl AuditConfig {
    /// Parse a configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Standard-library test honoring `extra_std_lib`
    ///
    /// Extra entries match whole path elements: `appengine` covers
    /// `appengine/datastore` but not `appenginex`.
    pub fn is_std_lib(&self, path: &str) -> bool {
        is_std_lib(path)
            || self.extra_std_lib.iter().any(|prefix| {
                path.strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
            })
    }
}
