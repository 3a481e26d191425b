// src/check/ineffectuals.rs

//! Accumulator for ineffectual rules found in one audit.

use crate::project::ProjectRoot;
use serde::Serialize;

/// Constraints and ignores that have no effect on resolution
///
/// Both lists keep insertion order. An audit never hands back an empty
/// value; it returns `None` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ineffectuals {
    constraints: Vec<ProjectRoot>,
    ignores: Vec<String>,
}

impl Ineffectuals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a constraint; recording the same root again is a no-op
    pub fn add_constraint(&mut self, root: ProjectRoot) {
        if !self.constraints.contains(&root) {
            self.constraints.push(root);
        }
    }

    /// Record an ignore; recording the same path again is a no-op
    pub fn add_ignore(&mut self, ignore: impl Into<String>) {
        let ignore = ignore.into();
        if !self.ignores.contains(&ignore) {
            self.ignores.push(ignore);
        }
    }

    /// True when neither constraints nor ignores were recorded
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty() && self.ignores.is_empty()
    }

    pub fn constraints(&self) -> &[ProjectRoot] {
        &self.constraints
    }

    pub fn ignores(&self) -> &[String] {
        &self.ignores
    }

    /// `None` when nothing was recorded
    pub fn into_option(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let found = Ineffectuals::new();
        assert!(found.is_empty());
        assert_eq!(found.constraints().len(), 0);
        assert_eq!(found.ignores().len(), 0);
        assert!(found.into_option().is_none());
    }

    #[test]
    fn test_appends_accumulate() {
        let mut found = Ineffectuals::new();
        found.add_ignore("github.com/x/b");
        assert!(!found.is_empty());

        found.add_constraint(ProjectRoot::new("github.com/x/a").unwrap());
        found.add_constraint(ProjectRoot::new("github.com/x/c").unwrap());
        found.add_ignore("github.com/x/d");

        assert_eq!(found.constraints().len(), 2);
        assert_eq!(found.constraints()[1].as_str(), "github.com/x/c");
        assert_eq!(found.ignores(), ["github.com/x/b", "github.com/x/d"]);
    }

    #[test]
    fn test_repeated_appends_kept_once() {
        let mut found = Ineffectuals::new();
        found.add_ignore("github.com/x/b");
        found.add_ignore("github.com/x/b");
        found.add_constraint(ProjectRoot::new("github.com/x/a").unwrap());
        found.add_constraint(ProjectRoot::new("github.com/x/a").unwrap());
        found.add_ignore("github.com/x/c");

        assert_eq!(found.ignores(), ["github.com/x/b", "github.com/x/c"]);
        assert_eq!(found.constraints().len(), 1);
    }

    #[test]
    fn test_serialize_shape() {
        let mut found = Ineffectuals::new();
        found.add_constraint(ProjectRoot::new("github.com/x/a").unwrap());
        let json = serde_json::to_value(&found).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "constraints": ["github.com/x/a"], "ignores": [] })
        );
    }
}
