//! The translator seam
//!
//! Every dialect implements [`SchemaTranslator`]; callers reach one through
//! the [`ConverterRegistry`](crate::registry::ConverterRegistry) and never
//! name the concrete type.

use crate::config::TranslatorConfig;
use modelddl_core::SchemaResult;
use modelddl_ir::ModelDescriptor;

/// Compiles model descriptors into DDL statements for one dialect.
///
/// Implementations are pure: no I/O, no state carried between calls. Each
/// returned string is one complete statement terminated by `;`.
pub trait SchemaTranslator: Send + Sync + std::fmt::Debug {
    /// Dialect name (e.g., "mysql")
    fn dialect(&self) -> &'static str;

    /// The configuration this translator was built with
    fn config(&self) -> &TranslatorConfig;

    /// `CREATE TABLE` statements for `models` in input order, followed by
    /// derived `CREATE INDEX` statements when index derivation is enabled.
    ///
    /// The first malformed model aborts the whole batch.
    fn convert(&self, models: &[ModelDescriptor]) -> SchemaResult<Vec<String>>;

    /// `DROP TABLE` statements for `models` in input order.
    fn drop_tables(&self, models: &[ModelDescriptor]) -> SchemaResult<Vec<String>>;
}
