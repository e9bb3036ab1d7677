//! # modelddl IR
//!
//! Read-only descriptors handed over by the model layer, plus schema file
//! loading.
//!
//! ## Core Concepts
//!
//! - **ModelDescriptor**: One entity type (e.g., User) and the table it maps to
//! - **FieldRule**: The type tags, bounds and default of one field
//! - **RelationDescriptor**: A link between two models, used to derive indexes
//! - **OrderedMap**: Name → value entries that keep their declaration order
//!

pub mod model;
pub mod ordered;
pub mod relation;
pub mod rule;
pub mod schema;

// Re-export commonly used types at crate root
pub use model::ModelDescriptor;
pub use ordered::OrderedMap;
pub use relation::{ModelRef, RelationDescriptor, RelationMode};
pub use rule::FieldRule;
pub use schema::{SchemaFile, load_models, save_models};

// Re-export core types that are commonly used with IR
pub use modelddl_core::{LogicalType, SchemaError, SchemaResult, TypeSet, Validatable};

/// Current schema version for schema files
pub const SCHEMA_VERSION: u32 = 1;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient re-exports for common usage
pub mod prelude {
    pub use crate::{
        FieldRule, LogicalType, ModelDescriptor, ModelRef, RelationDescriptor, RelationMode,
        SchemaError, SchemaResult, TypeSet,
    };
}
