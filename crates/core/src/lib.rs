//! # modelddl Core
//!
//! Core types, traits, and error handling for modelddl.
//!
//! This crate provides the foundational building blocks used by the other
//! crates in the workspace:
//!
//! - **Types**: Logical type tags (`LogicalType`) and ordered tag sets (`TypeSet`)
//! - **Traits**: `Validatable` and `Persistable`
//! - **Errors**: Unified error handling with `SchemaError` and `SchemaResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{SchemaError, SchemaResult};
pub use traits::{Persistable, Validatable};
pub use types::{LogicalType, TypeSet};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
