// tests/common/mod.rs

//! Shared builders for integration tests.

#![allow(dead_code)]

use ruleaudit::{Constraint, Package, PackageTree, ProjectManifest, ProjectRoot};

/// Import root used by every test tree
pub const PROJECT: &str = "github.com/me/proj";

/// Tree whose root command package imports `imports` directly
pub fn tree_importing(imports: &[&str]) -> PackageTree {
    PackageTree::new(PROJECT).with_package(
        PROJECT,
        Package::new("main").with_imports(imports.iter().copied()),
    )
}

/// Tree with a command, a library and a test-only dependency:
///
/// - root (main): fmt, github.com/x/a, <root>/lib
/// - <root>/lib: github.com/x/b, tests import github.com/x/assert
pub fn layered_tree() -> PackageTree {
    let lib = format!("{}/lib", PROJECT);
    PackageTree::new(PROJECT)
        .with_package(
            PROJECT,
            Package::new("main").with_imports(["fmt", "github.com/x/a", lib.as_str()]),
        )
        .with_package(
            lib,
            Package::new("lib")
                .with_imports(["github.com/x/b"])
                .with_test_imports(["github.com/x/assert"]),
        )
}

pub fn root(s: &str) -> ProjectRoot {
    ProjectRoot::new(s).unwrap()
}

/// Root manifest with `Any` constraints on each of `roots`
pub fn manifest_constraining(roots: &[&str]) -> ProjectManifest {
    roots.iter().fold(ProjectManifest::new(), |manifest, r| {
        manifest.with_constraint(root(r), Constraint::Any)
    })
}
