//! Schema file loading
//!
//! Model descriptors arrive as JSON. A schema file is either a wrapper
//! object carrying a version and a `models` list, or a bare array of models.
//! A directory is read as the concatenation of every `*.json` file below it,
//! in path order.

use crate::SCHEMA_VERSION;
use crate::model::ModelDescriptor;
use modelddl_core::{Persistable, SchemaError, SchemaResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// ============================================================================
// Schema File Wrapper
// ============================================================================

/// Versioned collection of model descriptors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaFile {
    /// Schema version of the file format
    #[serde(default = "current_version")]
    pub schema_version: u32,

    /// Models in translation order
    pub models: Vec<ModelDescriptor>,
}

fn current_version() -> u32 {
    SCHEMA_VERSION
}

impl SchemaFile {
    pub fn new(models: Vec<ModelDescriptor>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            models,
        }
    }

    /// Parse either the wrapped or the bare-array layout
    pub fn parse(json: &str) -> SchemaResult<Self> {
        // Dispatch on the raw text: going through `serde_json::Value` would
        // sort object keys and lose field declaration order.
        let file = if json.trim_start().starts_with('[') {
            SchemaFile::new(serde_json::from_str(json)?)
        } else {
            serde_json::from_str::<SchemaFile>(json)?
        };

        if file.schema_version > SCHEMA_VERSION {
            return Err(SchemaError::InvalidSchemaFormat(format!(
                "schema version {} is newer than supported version {}",
                file.schema_version, SCHEMA_VERSION
            )));
        }

        Ok(file)
    }
}

impl Persistable for SchemaFile {
    fn file_extension() -> &'static str {
        "json"
    }

    fn from_json(json: &str) -> SchemaResult<Self> {
        Self::parse(json)
    }
}

// ============================================================================
// Load Functions
// ============================================================================

/// Load models from a schema file or a directory of schema files
pub fn load_models(path: impl AsRef<Path>) -> SchemaResult<Vec<ModelDescriptor>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SchemaError::FileRead {
            path: path.to_path_buf(),
            message: "no such file or directory".to_string(),
        });
    }

    if path.is_file() {
        let file = SchemaFile::load_from_file(path)?;
        tracing::debug!(path = %path.display(), models = file.models.len(), "loaded schema file");
        return Ok(file.models);
    }

    let mut models = Vec::new();
    for file_path in schema_files_in(path)? {
        let file = SchemaFile::load_from_file(&file_path)?;
        tracing::debug!(path = %file_path.display(), models = file.models.len(), "loaded schema file");
        models.extend(file.models);
    }

    if models.is_empty() {
        tracing::warn!(path = %path.display(), "schema directory contains no models");
    }

    Ok(models)
}

/// Every `*.json` file below `dir`, sorted by path
fn schema_files_in(dir: &Path) -> SchemaResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| SchemaError::FileRead {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;
        let is_json = entry
            .path()
            .extension()
            .is_some_and(|ext| ext == SchemaFile::file_extension());
        if entry.file_type().is_file() && is_json {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Save models to a schema file in the wrapped layout
pub fn save_models(models: &[ModelDescriptor], path: impl AsRef<Path>) -> SchemaResult<()> {
    SchemaFile::new(models.to_vec()).save_to_file(path.as_ref())
}

// ============================================================================
// Tests
// ============================================================================
