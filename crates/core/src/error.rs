//! Error types for modelddl
//!
//! This module provides unified error handling for the registry, the
//! translators and schema file loading.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for modelddl
#[derive(Debug, Error)]
pub enum SchemaError {
    // ========================================================================
    // Registry Errors
    // ========================================================================
    /// No translator is registered for the requested driver identity
    #[error("Unknown driver: '{0}'")]
    UnknownDriver(String),

    // ========================================================================
    // Input Errors
    // ========================================================================
    /// A field rule cannot be mapped to a column definition
    #[error("Malformed field rule for '{model}.{field}': {message}")]
    MalformedFieldRule {
        model: String,
        field: String,
        message: String,
    },

    /// A relation descriptor is missing data required by its mode
    #[error("Malformed relation '{relation}' on model '{model}': {message}")]
    MalformedRelation {
        model: String,
        relation: String,
        message: String,
    },

    /// A model declares no fields at all
    #[error("Model '{0}' declares no fields")]
    EmptyModel(String),

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON (de)serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Schema file has an unexpected shape
    #[error("Invalid schema file format: {0}")]
    InvalidSchemaFormat(String),
}

impl SchemaError {
    /// Create a malformed field rule error
    pub fn malformed_field(
        model: impl Into<String>,
        field: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        SchemaError::MalformedFieldRule {
            model: model.into(),
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Create a malformed relation error
    pub fn malformed_relation(
        model: impl Into<String>,
        relation: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        SchemaError::MalformedRelation {
            model: model.into(),
            relation: relation.into(),
            message: msg.into(),
        }
    }

    /// Check if this error points at a structural defect in the input models
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SchemaError::MalformedFieldRule { .. }
                | SchemaError::MalformedRelation { .. }
                | SchemaError::EmptyModel(_)
                | SchemaError::InvalidSchemaFormat(_)
        )
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, SchemaError::Io(_) | SchemaError::FileRead { .. })
    }
}

/// Result type alias using SchemaError
pub type SchemaResult<T> = Result<T, SchemaError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_driver_names_identity() {
        let err = SchemaError::UnknownDriver("PostgresDriver".to_string());
        assert_eq!(err.to_string(), "Unknown driver: 'PostgresDriver'");
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_malformed_field_error() {
        let err = SchemaError::malformed_field("User", "tags", "no column type for [null]");
        assert!(err.is_input_error());
        assert_eq!(
            err.to_string(),
            "Malformed field rule for 'User.tags': no column type for [null]"
        );
    }

    #[test]
    fn test_malformed_relation_error() {
        let err = SchemaError::malformed_relation("Post", "tags", "missing class_via");
        assert!(err.is_input_error());
        assert_eq!(
            err.to_string(),
            "Malformed relation 'tags' on model 'Post': missing class_via"
        );
    }

    #[test]
    fn test_io_error_classification() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SchemaError = io_err.into();
        assert!(err.is_io());
        assert!(!err.is_input_error());
    }
}
