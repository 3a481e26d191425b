// src/check/mod.rs

//! Ineffectual rule detection
//!
//! A manifest rule is ineffectual when it declares intent about a package
//! the project never imports. This module reconciles the imports reachable
//! from a [`PackageTree`](crate::pkgtree::PackageTree) with a manifest's
//! constraints and ignore directives.
//!
//! # Example
//!
//! ```ignore
//! use ruleaudit::check::{find_ineffectual_rules, ConstraintPolicy};
//! use ruleaudit::pkgtree::is_std_lib;
//!
//! match find_ineffectual_rules(&manifest, &tree, is_std_lib, ConstraintPolicy::default())? {
//!     Some(found) => report(&found),
//!     None => println!("no ineffectual rules"),
//! }
//! ```

mod detector;
mod ineffectuals;
mod policy;

pub use detector::find_ineffectual_rules;
pub use ineffectuals::Ineffectuals;
pub use policy::ConstraintPolicy;
