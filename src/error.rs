// src/error.rs

//! Error types for rule auditing

use thiserror::Error;

/// Errors that can occur while loading inputs or auditing rules
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse manifest: {0}")]
    ManifestParse(#[from] toml::de::Error),

    #[error("Failed to parse package tree: {0}")]
    TreeParse(#[from] serde_json::Error),

    #[error("Invalid constraint: {0}")]
    InvalidConstraint(String),

    #[error("Unknown constraint policy: {0}")]
    UnknownPolicy(String),
}

/// Result type for rule auditing
pub type Result<T> = std::result::Result<T, Error>;
