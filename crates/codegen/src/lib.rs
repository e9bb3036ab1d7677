//! # modelddl Codegen
//!
//! DDL generation engine for modelddl.
//!
//! ## Pipeline
//!
//! ```text
//! driver identity ──► ConverterRegistry::get_converter() ──► TranslatorFactory
//!                                                                 │
//!                                          TranslatorConfig ──────┤
//!                                                                 ▼
//!                       &[ModelDescriptor] ──► SchemaTranslator::convert()     → Vec<String>
//!                                          └─► SchemaTranslator::drop_tables() → Vec<String>
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use modelddl_codegen::{ConverterRegistry, TranslatorConfig};
//!
//! let registry = ConverterRegistry::with_defaults();
//! let translator = registry.translator("mysql", TranslatorConfig::new().with_auto_indexes(true))?;
//! for statement in translator.convert(&models)? {
//!     println!("{statement}");
//! }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod config;
pub mod mysql;
pub mod registry;
pub mod translator;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::TranslatorConfig;
pub use mysql::MySqlTranslator;
pub use registry::{ConverterRegistry, TranslatorFactory};
pub use translator::SchemaTranslator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
