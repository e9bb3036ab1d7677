//! Core traits for modelddl
//!
//! This module defines the traits shared by descriptors and schema files:
//! structural checks before translation, and JSON persistence.

use crate::error::{SchemaError, SchemaResult};
use serde::{Serialize, de::DeserializeOwned};

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can check their own structural consistency
///
/// Translators call this before emitting anything, so a malformed input
/// fails the whole batch instead of producing partial DDL.
///
/// # Example
///
/// ```rust,ignore
/// use modelddl_core::{Validatable, SchemaResult, SchemaError};
///
/// struct Column {
///     name: String,
/// }
///
/// impl Validatable for Column {
///     fn validate(&self) -> SchemaResult<()> {
///         if self.name.is_empty() {
///             return Err(SchemaError::InvalidSchemaFormat("empty column name".into()));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `SchemaError` describing the problem.
    fn validate(&self) -> SchemaResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// ============================================================================
// Persistable Trait
// ============================================================================

/// Trait for types that can be serialized to and deserialized from files
///
/// Schema files are JSON documents; this trait gives them a uniform
/// load/save surface with path-aware error messages.
pub trait Persistable: Serialize + DeserializeOwned + Sized {
    /// Get the file extension for this type (without the dot)
    fn file_extension() -> &'static str;

    /// Save to a JSON string
    fn to_json(&self) -> SchemaResult<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }

    /// Load from a JSON string
    fn from_json(json: &str) -> SchemaResult<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Save to a file
    fn save_to_file(&self, path: &std::path::Path) -> SchemaResult<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(SchemaError::from)
    }

    /// Load from a file
    fn load_from_file(path: &std::path::Path) -> SchemaResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| SchemaError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&json).map_err(|e| SchemaError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    struct Flag {
        valid: bool,
    }

    impl Validatable for Flag {
        fn validate(&self) -> SchemaResult<()> {
            if self.valid {
                Ok(())
            } else {
                Err(SchemaError::InvalidSchemaFormat("Invalid state".to_string()))
            }
        }
    }

    #[test]
    fn test_validatable_trait() {
        assert!(Flag { valid: true }.is_valid());
        assert!(!Flag { valid: false }.is_valid());
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Doc {
        name: String,
    }

    impl Persistable for Doc {
        fn file_extension() -> &'static str {
            "json"
        }
    }

    #[test]
    fn test_persistable_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");

        let doc = Doc {
            name: "users".to_string(),
        };
        doc.save_to_file(&path).unwrap();

        let loaded = Doc::load_from_file(&path).unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_persistable_missing_file_is_file_read() {
        let dir = tempfile::tempdir().unwrap();
        let err = Doc::load_from_file(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.is_io());
    }
}
