// src/manifest/parser.rs

//! Parser for TOML dependency manifests.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use super::{Constraint, ProjectManifest};
use crate::error::{Error, Result};
use crate::project::ProjectRoot;
use semver::VersionReq;

/// On-disk layout of a manifest file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestFile {
    /// Packages required even if nothing imports them
    #[serde(default)]
    required: Vec<String>,

    /// Import paths to ignore
    #[serde(default)]
    ignored: Vec<String>,

    /// Constraints keyed by project root
    #[serde(default)]
    constraint: BTreeMap<String, ConstraintSpec>,
}

/// A single `[constraint."<root>"]` table
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConstraintSpec {
    version: Option<String>,
    branch: Option<String>,
    revision: Option<String>,
}

impl ConstraintSpec {
    fn into_constraint(self, root: &str) -> Result<Constraint> {
        match (self.version, self.branch, self.revision) {
            (None, None, None) => Ok(Constraint::Any),
            (Some(version), None, None) => VersionReq::parse(&version)
                .map(Constraint::Version)
                .map_err(|e| {
                    Error::InvalidConstraint(format!("'{}' for {}: {}", version, root, e))
                }),
            (None, Some(branch), None) => Ok(Constraint::Branch(branch)),
            (None, None, Some(revision)) => Ok(Constraint::Revision(revision)),
            _ => Err(Error::InvalidConstraint(format!(
                "{} declares more than one of version, branch, revision",
                root
            ))),
        }
    }
}

/// Parse a manifest from a TOML string
pub fn parse_manifest_str(content: &str) -> Result<ProjectManifest> {
    let file: ManifestFile = toml::from_str(content)?;
    let mut manifest = ProjectManifest::new();

    for (root, spec) in file.constraint {
        let constraint = spec.into_constraint(&root)?;
        manifest.constraints.insert(ProjectRoot::new(root)?, constraint);
    }

    for path in file.required {
        manifest.required.insert(non_empty_path(path, "required")?);
    }

    for path in file.ignored {
        manifest.ignored.insert(non_empty_path(path, "ignored")?);
    }

    debug!(
        "Parsed manifest: {} constraints, {} required, {} ignored",
        manifest.constraints.len(),
        manifest.required.len(),
        manifest.ignored.len()
    );

    Ok(manifest)
}

/// Parse a manifest from a TOML file
pub fn parse_manifest_file(path: &Path) -> Result<ProjectManifest> {
    let content = std::fs::read_to_string(path)?;
    parse_manifest_str(&content)
}

fn non_empty_path(path: String, field: &str) -> Result<String> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidArgument(format!("empty import path in '{}'", field)));
    }
    Ok(trimmed.to_string())
}
