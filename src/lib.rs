// src/lib.rs

//! Ruleaudit - ineffectual manifest rule detection
//!
//! Finds version constraints and ignore directives in a dependency
//! manifest that refer to packages the project never imports, so they can
//! be pruned.
//!
//! # Architecture
//!
//! - `pkgtree`: local packages and the external imports they reach
//! - `manifest`: declared constraints, plus required/ignored packages for
//!   the root project
//! - `check`: reconciliation of the two into ineffectual rules
//!
//! The audit only reads its inputs: manifests are never rewritten and
//! nothing is fetched.

pub mod check;
pub mod config;
mod error;
pub mod manifest;
pub mod pkgtree;
pub mod project;

pub use check::{ConstraintPolicy, Ineffectuals, find_ineffectual_rules};
pub use config::{AuditConfig, DEFAULT_CONFIG_PATH};
pub use error::{Error, Result};
pub use manifest::{
    Constraint, Manifest, ProjectConstraints, ProjectManifest, RootManifest, SimpleManifest,
    parse_manifest_file, parse_manifest_str,
};
pub use pkgtree::{Package, PackageOrErr, PackageTree, Reach, ReachMap, is_std_lib};
pub use project::ProjectRoot;
