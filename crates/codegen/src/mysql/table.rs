//! CREATE TABLE / DROP TABLE assembly

use super::column::column_sql;
use crate::config::TranslatorConfig;
use modelddl_core::{SchemaResult, Validatable};
use modelddl_ir::ModelDescriptor;

/// `CREATE TABLE` statement for `model`, columns in declaration order
pub fn generate_table_sql(config: &TranslatorConfig, model: &ModelDescriptor) -> SchemaResult<String> {
    model.validate()?;

    let mut items = model
        .fields()
        .map(|(name, rule)| column_sql(model, name, rule))
        .collect::<SchemaResult<Vec<_>>>()?;
    items.push(format!("PRIMARY KEY ({})", model.id_key));

    let mut sql = String::new();
    if config.comments {
        sql.push_str(&format!(
            "# Create table \"{}\" for model \"{}\"\n\n",
            model.table, model.name
        ));
    }

    if config.one_line {
        sql.push_str(&format!("CREATE TABLE {} ({});", model.table, items.join(", ")));
    } else {
        sql.push_str(&format!(
            "CREATE TABLE {} (\n\t{}\n);",
            model.table,
            items.join(",\n\t")
        ));
    }

    tracing::debug!(table = %model.table, columns = items.len() - 1, "generated table");
    Ok(sql)
}

/// Idempotent `DROP TABLE` statement for `model`
pub fn generate_drop_table_sql(model: &ModelDescriptor) -> String {
    format!("DROP TABLE IF EXISTS {};", model.table)
}
