// src/pkgtree/stdlib.rs

//! Default standard-library classification

/// Classify an import path as standard library
///
/// Standard-library paths have no domain in their first element
/// (`fmt`, `net/http`), unlike remote paths such as `github.com/x/a`.
pub fn is_std_lib(path: &str) -> bool {
    match path.split('/').next() {
        Some(first) if !first.is_empty() => !first.contains('.'),
        _ => false,
    }
}
