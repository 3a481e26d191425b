// src/manifest/mod.rs

//! Dependency manifests
//!
//! A manifest declares version constraints on the projects a codebase
//! depends on. The root project's own manifest can additionally declare
//! packages that are required regardless of imports, and packages whose
//! imports should be ignored.
//!
//! Whether a manifest carries the root-level rules is a capability, tested
//! through [`Manifest::as_root_manifest`]:
//!
//! ```ignore
//! if let Some(root) = manifest.as_root_manifest() {
//!     for ignore in root.ignored_packages() {
//!         // ...
//!     }
//! }
//! ```
//!
//! # Example manifest.toml
//!
//! ```toml
//! required = ["github.com/y/c"]
//! ignored = ["github.com/x/b"]
//!
//! [constraint."github.com/x/a"]
//! version = "^1.2"
//!
//! [constraint."github.com/y/c"]
//! branch = "master"
//! ```

mod parser;

pub use parser::{parse_manifest_file, parse_manifest_str};

use crate::project::ProjectRoot;
use semver::VersionReq;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Declared constraints keyed by project root
pub type ProjectConstraints = BTreeMap<ProjectRoot, Constraint>;

/// A version rule declared for a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Any version is acceptable
    Any,
    /// A semver range, e.g. `^1.2` or `>=1.0, <2.0`
    Version(VersionReq),
    /// A named branch
    Branch(String),
    /// An exact revision
    Revision(String),
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Any => write!(f, "*"),
            Constraint::Version(req) => write!(f, "{}", req),
            Constraint::Branch(branch) => write!(f, "branch {}", branch),
            Constraint::Revision(rev) => write!(f, "revision {}", rev),
        }
    }
}

/// Read-only view of a manifest's declared rules
pub trait Manifest {
    /// Version constraints declared for dependencies
    fn dependency_constraints(&self) -> ProjectConstraints;

    /// Capability test for root-level rules
    ///
    /// Returns the narrowed view when this manifest also declares required
    /// and ignored packages, `None` otherwise.
    fn as_root_manifest(&self) -> Option<&dyn RootManifest> {
        None
    }
}

/// A manifest that also declares required and ignored packages
pub trait RootManifest: Manifest {
    /// Packages that count as used even when no import reaches them
    fn required_packages(&self) -> BTreeSet<String>;

    /// Import paths excluded from resolution
    fn ignored_packages(&self) -> BTreeSet<String>;
}

/// Manifest carrying only dependency constraints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleManifest {
    pub constraints: ProjectConstraints,
}

impl SimpleManifest {
    pub fn new(constraints: ProjectConstraints) -> Self {
        Self { constraints }
    }
}

impl Manifest for SimpleManifest {
    fn dependency_constraints(&self) -> ProjectConstraints {
        self.constraints.clone()
    }
}

/// Manifest of the project being audited
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectManifest {
    pub constraints: ProjectConstraints,
    pub required: BTreeSet<String>,
    pub ignored: BTreeSet<String>,
}

impl ProjectManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a constraint for a project
    pub fn with_constraint(mut self, root: ProjectRoot, constraint: Constraint) -> Self {
        self.constraints.insert(root, constraint);
        self
    }

    /// Mark a package as required
    pub fn with_required(mut self, path: impl Into<String>) -> Self {
        self.required.insert(path.into());
        self
    }

    /// Ignore an import path
    pub fn with_ignored(mut self, path: impl Into<String>) -> Self {
        self.ignored.insert(path.into());
        self
    }

    /// Drop the root-level rules, keeping only constraints
    pub fn into_simple(self) -> SimpleManifest {
        SimpleManifest::new(self.constraints)
    }
}

impl Manifest for ProjectManifest {
    fn dependency_constraints(&self) -> ProjectConstraints {
        self.constraints.clone()
    }

    fn as_root_manifest(&self) -> Option<&dyn RootManifest> {
        Some(self)
    }
}

impl RootManifest for ProjectManifest {
    fn required_packages(&self) -> BTreeSet<String> {
        self.required.clone()
    }

    fn ignored_packages(&self) -> BTreeSet<String> {
        self.ignored.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(s: &str) -> ProjectRoot {
        ProjectRoot::new(s).unwrap()
    }

    #[test]
    fn test_simple_manifest_has_no_root_capability() {
        let manifest = SimpleManifest::new(ProjectConstraints::from([(
            root("github.com/x/a"),
            Constraint::Any,
        )]));
        assert!(manifest.as_root_manifest().is_none());
        assert_eq!(manifest.dependency_constraints().len(), 1);
    }

    #[test]
    fn test_project_manifest_exposes_root_rules() {
        let manifest = ProjectManifest::new()
            .with_required("github.com/y/c")
            .with_ignored("github.com/x/b")
            .with_ignored("github.com/x/b");

        let view = manifest.as_root_manifest().unwrap();
        assert_eq!(view.required_packages().len(), 1);
        assert_eq!(
            view.ignored_packages().into_iter().collect::<Vec<_>>(),
            vec!["github.com/x/b".to_string()]
        );
    }

    #[test]
    fn test_into_simple_keeps_constraints() {
        let manifest = ProjectManifest::new()
            .with_constraint(root("github.com/x/a"), Constraint::Branch("main".to_string()))
            .with_ignored("github.com/x/b");
        let simple = manifest.clone().into_simple();
        assert_eq!(simple.dependency_constraints(), manifest.dependency_constraints());
    }

    #[test]
    fn test_constraint_display() {
        let req = VersionReq::parse("^1.2").unwrap();
        assert_eq!(Constraint::Version(req).to_string(), "^1.2");
        assert_eq!(Constraint::Any.to_string(), "*");
        assert_eq!(Constraint::Branch("master".into()).to_string(), "branch master");
        assert_eq!(Constraint::Revision("abc123".into()).to_string(), "revision abc123");
    }
}
