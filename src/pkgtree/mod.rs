// src/pkgtree/mod.rs

//! Package trees and import reachability
//!
//! A [`PackageTree`] describes the packages of the project being audited:
//! their import paths, names and the paths each one imports. Trees are
//! produced by a language-specific source scanner and handed over as JSON:
//!
//! ```json
//! {
//!   "import_root": "github.com/me/proj",
//!   "packages": {
//!     "github.com/me/proj": {
//!       "package": { "name": "main", "imports": ["fmt", "github.com/x/a"] }
//!     },
//!     "github.com/me/proj/broken": { "error": "expected 'package', found 'EOF'" }
//!   }
//! }
//! ```
//!
//! [`PackageTree::to_reach_map`] computes, per local package, the external
//! paths it transitively reaches; [`ReachMap::flatten`] collapses that into
//! one sorted list.

mod reach;
pub mod stdlib;

pub use reach::{Reach, ReachMap};
pub use stdlib::is_std_lib;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Package name marking a command (executable) package
pub const MAIN_PACKAGE: &str = "main";

/// A parsed source package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Declared package name
    pub name: String,

    /// Paths imported by non-test sources
    #[serde(default)]
    pub imports: Vec<String>,

    /// Paths imported only by test sources
    #[serde(default)]
    pub test_imports: Vec<String>,
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports.extend(imports.into_iter().map(Into::into));
        self
    }

    pub fn with_test_imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.test_imports.extend(imports.into_iter().map(Into::into));
        self
    }

    /// Whether this is a command package
    pub fn is_main(&self) -> bool {
        self.name == MAIN_PACKAGE
    }
}

/// A package, or the error encountered while parsing it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageOrErr {
    Package(Package),
    Error(String),
}

/// All local packages of a project, keyed by import path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageTree {
    /// Import path of the project root
    pub import_root: String,

    #[serde(default)]
    pub packages: BTreeMap<String, PackageOrErr>,
}

impl PackageTree {
    pub fn new(import_root: impl Into<String>) -> Self {
        Self {
            import_root: import_root.into(),
            packages: BTreeMap::new(),
        }
    }

    /// Add a parsed package at `path`
    pub fn with_package(mut self, path: impl Into<String>, package: Package) -> Self {
        self.packages.insert(path.into(), PackageOrErr::Package(package));
        self
    }

    /// Add a package that failed to parse
    pub fn with_error(mut self, path: impl Into<String>, message: impl Into<String>) -> Self {
        self.packages.insert(path.into(), PackageOrErr::Error(message.into()));
        self
    }

    /// Load a tree from its JSON form
    pub fn from_json_str(content: &str) -> Result<Self> {
        let tree: Self = serde_json::from_str(content)?;
        tree.validate()?;
        Ok(tree)
    }

    /// Load a tree from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Check that the tree is usable for reachability analysis
    ///
    /// The import root must be non-empty and every package must live at
    /// or below it.
    pub fn validate(&self) -> Result<()> {
        if self.import_root.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "package tree has an empty import root".to_string(),
            ));
        }

        if let Some(stray) = self.packages.keys().find(|path| !self.is_local(path)) {
            return Err(Error::InvalidArgument(format!(
                "package {} is outside import root {}",
                stray, self.import_root
            )));
        }

        Ok(())
    }

    /// Whether `path` names a package inside this project
    pub fn is_local(&self, path: &str) -> bool {
        match path.strip_prefix(self.import_root.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}
