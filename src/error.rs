//! Custom error types for mandi-targets
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for target-planning operations
#[derive(Error, Debug)]
pub enum TargetError {
    /// Validation errors for amounts, months, and scopes
    #[error("Validation error: {0}")]
    Validation(String),

    /// Errors parsing user-supplied input (years, amounts, edit specs)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Errors raised by a persistence backend
    #[error("Storage error: {0}")]
    Storage(String),
}

impl TargetError {
    /// Create a "not found" error for checkposts
    pub fn checkpost_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Checkpost",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for target records
    pub fn record_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Target record",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TargetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TargetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for TargetError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for target-planning operations
pub type TargetResult<T> = Result<T, TargetError>;
