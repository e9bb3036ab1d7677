//! # MySQL Translator
//!
//! Compiles model descriptors into MySQL DDL.
//!
//! ## Output
//!
//! - `CREATE TABLE` per model, columns in declaration order, `PRIMARY KEY`
//!   on the model's id key, `AUTO_INCREMENT` on that column
//! - Optional `CREATE INDEX` per foreign-key column reachable through
//!   relations, after all tables
//! - `DROP TABLE IF EXISTS` per model

pub mod column;
pub mod index;
pub mod table;

pub use column::{ColumnType, IntegerWidth, column_sql};
pub use index::{IndexSet, IndexTarget, collect_indexes};
pub use table::{generate_drop_table_sql, generate_table_sql};

use crate::config::TranslatorConfig;
use crate::translator::SchemaTranslator;
use modelddl_core::SchemaResult;
use modelddl_ir::ModelDescriptor;

/// Driver identity the MySQL translator is registered under
pub const DRIVER: &str = "mysql";

/// Driver class name used by the model layer, accepted as an alias
pub const DRIVER_ALIAS: &str = "MySQLDriver";

/// MySQL implementation of [`SchemaTranslator`]
#[derive(Debug, Clone, Default)]
pub struct MySqlTranslator {
    config: TranslatorConfig,
}

impl MySqlTranslator {
    pub fn new(config: TranslatorConfig) -> Self {
        Self { config }
    }

    /// Registry factory
    pub fn boxed(config: TranslatorConfig) -> Box<dyn SchemaTranslator> {
        Box::new(Self::new(config))
    }
}

impl SchemaTranslator for MySqlTranslator {
    fn dialect(&self) -> &'static str {
        DRIVER
    }

    fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    fn convert(&self, models: &[ModelDescriptor]) -> SchemaResult<Vec<String>> {
        let mut queries = Vec::with_capacity(models.len());
        let mut indexes = IndexSet::new();

        for model in models {
            queries.push(generate_table_sql(&self.config, model)?);
            if self.config.auto_indexes {
                collect_indexes(model, &mut indexes)?;
            }
        }

        if self.config.auto_indexes {
            queries.extend(indexes.to_sql());
        }

        tracing::info!(
            dialect = DRIVER,
            tables = models.len(),
            indexes = indexes.len(),
            "converted models",
        );

        Ok(queries)
    }

    fn drop_tables(&self, models: &[ModelDescriptor]) -> SchemaResult<Vec<String>> {
        let queries: Vec<String> = models.iter().map(generate_drop_table_sql).collect();
        tracing::info!(dialect = DRIVER, tables = queries.len(), "generated drop statements");
        Ok(queries)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use modelddl_core::SchemaError;
    use modelddl_ir::{FieldRule, ModelRef, RelationDescriptor};
    use pretty_assertions::assert_eq;

    fn user() -> ModelDescriptor {
        ModelDescriptor::new("User", "users")
            .with_field("id", FieldRule::integer().with_min(0))
            .with_field("email", FieldRule::string().with_max(255))
            .with_field("active", FieldRule::boolean().with_default(true))
            .with_relation(
                "posts",
                RelationDescriptor::children(
                    ModelRef::new("User", "users"),
                    "id",
                    ModelRef::new("Post", "posts"),
                    "user_id",
                ),
            )
    }

    fn post() -> ModelDescriptor {
        ModelDescriptor::new("Post", "posts")
            .with_field("id", FieldRule::integer().with_min(0))
            .with_field("user_id", FieldRule::integer().with_min(0))
            .with_field("body", FieldRule::string().nullable())
            .with_relation(
                "author",
                RelationDescriptor::parent(
                    ModelRef::new("Post", "posts"),
                    "user_id",
                    ModelRef::new("User", "users"),
                    "id",
                ),
            )
    }

    fn one_line() -> MySqlTranslator {
        MySqlTranslator::new(TranslatorConfig::new().with_one_line(true))
    }

    #[test]
    fn test_convert_user_end_to_end() {
        let queries = one_line().convert(&[user()]).unwrap();
        assert_eq!(
            queries,
            vec![
                "CREATE TABLE users (id INT(10) UNSIGNED NOT NULL AUTO_INCREMENT, \
                 email VARCHAR(255) NOT NULL, \
                 active TINYINT(1) UNSIGNED NOT NULL DEFAULT 1, \
                 PRIMARY KEY (id));"
            ]
        );
    }

    #[test]
    fn test_drop_user_end_to_end() {
        assert_eq!(
            one_line().drop_tables(&[user()]).unwrap(),
            vec!["DROP TABLE IF EXISTS users;"]
        );
    }

    #[test]
    fn test_drop_keeps_input_order() {
        assert_eq!(
            one_line().drop_tables(&[post(), user()]).unwrap(),
            vec!["DROP TABLE IF EXISTS posts;", "DROP TABLE IF EXISTS users;"]
        );
    }

    #[test]
    fn test_indexes_off_by_default() {
        let queries = one_line().convert(&[user(), post()]).unwrap();
        assert_eq!(queries.len(), 2);
        assert!(queries.iter().all(|q| q.starts_with("CREATE TABLE")));
    }

    #[test]
    fn test_indexes_follow_tables_and_deduplicate() {
        let translator = MySqlTranslator::new(
            TranslatorConfig::new().with_one_line(true).with_auto_indexes(true),
        );
        let queries = translator.convert(&[user(), post()]).unwrap();

        // users.posts (children) and posts.author (parent) both target posts.user_id
        assert_eq!(queries.len(), 3);
        assert!(queries[0].starts_with("CREATE TABLE users"));
        assert!(queries[1].starts_with("CREATE TABLE posts"));
        assert_eq!(queries[2], "CREATE INDEX index_posts__user_id ON posts (user_id);");
    }

    #[test]
    fn test_two_child_relations_to_same_column_yield_one_index() {
        let child = |owner: &str, table: &str| {
            ModelDescriptor::new(owner, table)
                .with_field("id", FieldRule::integer().with_min(0))
                .with_relation(
                    "audit",
                    RelationDescriptor::child(
                        ModelRef::new(owner, table),
                        "id",
                        ModelRef::new("Audit", "audits"),
                        "subject_id",
                    ),
                )
        };
        let translator = MySqlTranslator::new(TranslatorConfig::new().with_auto_indexes(true));
        let queries = translator
            .convert(&[child("User", "users"), child("Team", "teams")])
            .unwrap();

        let index_count = queries.iter().filter(|q| q.starts_with("CREATE INDEX")).count();
        assert_eq!(index_count, 1);
        assert_eq!(
            queries.last().unwrap(),
            "CREATE INDEX index_audits__subject_id ON audits (subject_id);"
        );
    }

    #[test]
    fn test_convert_is_repeatable() {
        let translator = MySqlTranslator::new(TranslatorConfig::new().with_auto_indexes(true));
        let models = [user(), post()];

        let _ = translator.drop_tables(&models).unwrap();
        let first = translator.convert(&models).unwrap();
        let second = translator.convert(&models).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_model_aborts_batch() {
        let broken = ModelDescriptor::new("Ghost", "ghosts")
            .with_field("id", FieldRule::integer().with_min(0))
            .with_field("shade", FieldRule::new(modelddl_core::LogicalType::Null));

        let err = one_line().convert(&[user(), broken]).unwrap_err();
        assert!(matches!(err, SchemaError::MalformedFieldRule { ref field, .. } if field == "shade"));
    }

    #[test]
    fn test_dialect_name() {
        assert_eq!(MySqlTranslator::default().dialect(), "mysql");
    }
}
