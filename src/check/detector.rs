// src/check/detector.rs

//! Reconciles reachable imports with declared manifest rules.

use super::{ConstraintPolicy, Ineffectuals};
use crate::error::Result;
use crate::manifest::Manifest;
use crate::pkgtree::PackageTree;
use std::collections::BTreeSet;
use tracing::debug;

/// Find constraints and ignores in `manifest` that have no effect on `tree`
///
/// The import set is everything reachable from the tree (command packages
/// and tests included, broken packages not propagated), minus paths
/// `is_std_lib` classifies as standard library. When the manifest is a
/// root manifest its required packages join the import set, and each
/// ignore whose path is absent from the set is ineffectual. Constraints
/// are classified according to `policy`.
///
/// Returns `Ok(None)` when no rule is ineffectual. Fails with
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) before any
/// analysis if the tree is malformed.
pub fn find_ineffectual_rules<F>(
    manifest: &dyn Manifest,
    tree: &PackageTree,
    is_std_lib: F,
    policy: ConstraintPolicy,
) -> Result<Option<Ineffectuals>>
where
    F: Fn(&str) -> bool,
{
    tree.validate()?;

    let mut found = Ineffectuals::new();

    let reach_map = tree.to_reach_map(true, true, false, &BTreeSet::new());
    let mut imports: BTreeSet<String> = reach_map.flatten(is_std_lib).into_iter().collect();
    debug!(
        "{} packages reach {} non-stdlib imports",
        reach_map.len(),
        imports.len()
    );

    if let Some(root) = manifest.as_root_manifest() {
        imports.extend(root.required_packages());

        for ignore in root.ignored_packages() {
            if !imports.contains(&ignore) {
                debug!("Ignore {} matches no import", ignore);
                found.add_ignore(ignore);
            }
        }
    }

    for project_root in manifest.dependency_constraints().into_keys() {
        let imported = imports.contains(project_root.as_str());
        if policy.is_ineffectual(imported) {
            debug!(
                "Constraint on {} is ineffectual (imported: {}, policy: {})",
                project_root, imported, policy
            );
            found.add_constraint(project_root);
        }
    }

    Ok(found.into_option())
}
