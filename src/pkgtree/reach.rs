// src/pkgtree/reach.rs

//! Reachability analysis over a package tree.

use super::{PackageOrErr, PackageTree};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::debug;

/// Paths transitively reached from one local package
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reach {
    /// Paths outside the project
    pub external: BTreeSet<String>,
    /// Other project packages on the way
    pub internal: BTreeSet<String>,
}

/// Reachability per local package, keyed by import path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReachMap(BTreeMap<String, Reach>);

impl ReachMap {
    pub fn get(&self, path: &str) -> Option<&Reach> {
        self.0.get(path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Reach)> {
        self.0.iter()
    }

    /// Collapse into a sorted, deduplicated list of external paths
    ///
    /// Paths for which `is_std_lib` returns true are dropped.
    pub fn flatten<F>(&self, is_std_lib: F) -> Vec<String>
    where
        F: Fn(&str) -> bool,
    {
        self.0
            .values()
            .flat_map(|reach| reach.external.iter())
            .filter(|path| !is_std_lib(path))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl PackageTree {
    /// Compute the reach map of this tree
    ///
    /// - `main`: include command packages as roots
    /// - `tests`: follow the test imports of each root package
    /// - `backprop`: drop packages that transitively import a local package
    ///   which is missing or failed to parse; otherwise such imports are
    ///   skipped and the remaining reach is kept
    /// - `ignore`: paths never visited nor reported
    ///
    /// Import cycles are followed once; a package never reaches itself.
    pub fn to_reach_map(
        &self,
        main: bool,
        tests: bool,
        backprop: bool,
        ignore: &BTreeSet<String>,
    ) -> ReachMap {
        let mut map = BTreeMap::new();

        for (path, entry) in &self.packages {
            if ignore.contains(path) {
                continue;
            }
            let PackageOrErr::Package(pkg) = entry else {
                continue;
            };
            if !main && pkg.is_main() {
                continue;
            }

            let mut start: Vec<&str> = pkg.imports.iter().map(String::as_str).collect();
            if tests {
                start.extend(pkg.test_imports.iter().map(String::as_str));
            }

            let (reach, poisoned) = self.reach_from(path, start, ignore);
            if backprop && poisoned {
                debug!("Dropping {} from reach map: imports a broken package", path);
                continue;
            }
            map.insert(path.clone(), reach);
        }

        ReachMap(map)
    }

    /// Walk imports from `origin`, returning the reach and whether a
    /// missing or broken local package was encountered
    fn reach_from<'a>(
        &'a self,
        origin: &'a str,
        start: Vec<&'a str>,
        ignore: &BTreeSet<String>,
    ) -> (Reach, bool) {
        let mut reach = Reach::default();
        let mut poisoned = false;
        let mut visited: HashSet<&str> = HashSet::from([origin]);
        let mut stack = start;

        while let Some(path) = stack.pop() {
            if ignore.contains(path) || !visited.insert(path) {
                continue;
            }

            if !self.is_local(path) {
                reach.external.insert(path.to_string());
                continue;
            }

            match self.packages.get(path) {
                Some(PackageOrErr::Package(pkg)) => {
                    reach.internal.insert(path.to_string());
                    stack.extend(pkg.imports.iter().map(String::as_str));
                }
                Some(PackageOrErr::Error(_)) | None => poisoned = true,
            }
        }

        (reach, poisoned)
    }
}
