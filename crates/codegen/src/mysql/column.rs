//! Field rule → MySQL column definition
//!
//! A rule's type tags are checked in a fixed order (boolean, integer, string,
//! number, array/object) and the first tag present decides the column type.
//! Bounds then pick sizes, `null` decides nullability, and the primary key
//! gets `AUTO_INCREMENT`.

use modelddl_core::{LogicalType, SchemaError, SchemaResult};
use modelddl_ir::{FieldRule, ModelDescriptor};
use serde_json::Value;

// ============================================================================
// Integer widths
// ============================================================================

/// The four integer column classes, smallest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerWidth {
    Tiny,
    Small,
    Int,
    Big,
}

impl IntegerWidth {
    /// Smallest width whose range covers `max`; `INT` when there is no bound
    pub fn for_max(max: Option<f64>, unsigned: bool) -> Self {
        let Some(max) = max else {
            return IntegerWidth::Int;
        };

        if (unsigned && max <= 255.0) || (!unsigned && max <= 127.0) {
            IntegerWidth::Tiny
        } else if (unsigned && max <= 65_535.0) || (!unsigned && max <= 32_767.0) {
            IntegerWidth::Small
        } else if (unsigned && max > 4_294_967_295.0) || (!unsigned && max > 2_147_483_647.0) {
            IntegerWidth::Big
        } else {
            IntegerWidth::Int
        }
    }

    /// SQL type with display width
    pub fn sql(&self, unsigned: bool) -> &'static str {
        match (self, unsigned) {
            (IntegerWidth::Tiny, true) => "TINYINT(3)",
            (IntegerWidth::Tiny, false) => "TINYINT(4)",
            (IntegerWidth::Small, true) => "SMALLINT(5)",
            (IntegerWidth::Small, false) => "SMALLINT(6)",
            (IntegerWidth::Int, true) => "INT(10)",
            (IntegerWidth::Int, false) => "INT(11)",
            (IntegerWidth::Big, _) => "BIGINT(20)",
        }
    }
}

// ============================================================================
// Column types
// ============================================================================

/// Column type chosen for a field rule
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnType {
    /// `TINYINT(1) UNSIGNED`
    Boolean,
    Integer { width: IntegerWidth, unsigned: bool },
    /// Unbounded string
    Text,
    /// Fixed-length string
    Char(f64),
    /// Bounded variable-length string
    VarChar(f64),
    Float,
    /// Arrays and objects
    Json,
}

impl ColumnType {
    /// Map a rule to its column type, or `None` when no tag has a mapping
    pub fn for_rule(rule: &FieldRule) -> Option<Self> {
        let ty = if rule.has_type(LogicalType::Boolean) {
            ColumnType::Boolean
        } else if rule.has_type(LogicalType::Integer) {
            let unsigned = rule.is_unsigned();
            ColumnType::Integer {
                width: IntegerWidth::for_max(rule.max, unsigned),
                unsigned,
            }
        } else if rule.has_type(LogicalType::String) {
            match rule.max {
                None => ColumnType::Text,
                Some(max) if rule.is_fixed_length() => ColumnType::Char(max),
                Some(max) => ColumnType::VarChar(max),
            }
        } else if rule.has_type(LogicalType::Number) {
            ColumnType::Float
        } else if rule.has_type(LogicalType::Array) || rule.has_type(LogicalType::Object) {
            ColumnType::Json
        } else {
            return None;
        };
        Some(ty)
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Boolean => f.write_str("TINYINT(1) UNSIGNED"),
            ColumnType::Integer { width, unsigned } => {
                f.write_str(width.sql(*unsigned))?;
                if *unsigned {
                    f.write_str(" UNSIGNED")?;
                }
                Ok(())
            }
            ColumnType::Text => f.write_str("TEXT"),
            ColumnType::Char(len) => write!(f, "CHAR({})", len),
            ColumnType::VarChar(len) => write!(f, "VARCHAR({})", len),
            ColumnType::Float => f.write_str("FLOAT"),
            ColumnType::Json => f.write_str("JSON"),
        }
    }
}

// ============================================================================
// Column definition
// ============================================================================

/// Render the column definition for field `name` of `model`
pub fn column_sql(model: &ModelDescriptor, name: &str, rule: &FieldRule) -> SchemaResult<String> {
    let column_type = ColumnType::for_rule(rule).ok_or_else(|| {
        SchemaError::malformed_field(
            &model.name,
            name,
            format!("no column type for type list {}", rule.types),
        )
    })?;

    let is_id = model.is_id_key(name);
    if is_id && matches!(rule.min, Some(min) if min < 0.0) {
        return Err(SchemaError::malformed_field(
            &model.name,
            name,
            "auto-increment primary key cannot declare a negative minimum",
        ));
    }

    let mut parts = vec![name.to_string(), column_type.to_string()];

    if !rule.is_nullable() {
        parts.push("NOT NULL".to_string());
    }

    match &rule.default {
        Some(value) => parts.push(default_clause(model, name, rule, &column_type, value)?),
        None if rule.is_nullable() => parts.push("DEFAULT NULL".to_string()),
        None => {}
    }

    if is_id {
        parts.push("AUTO_INCREMENT".to_string());
    }

    Ok(parts.join(" "))
}

/// `DEFAULT` clause for an explicit default literal.
///
/// Boolean columns take `1`/`0` by truthiness, `null` included. A `null`
/// default on any other column needs `null` in the type list.
fn default_clause(
    model: &ModelDescriptor,
    name: &str,
    rule: &FieldRule,
    column_type: &ColumnType,
    value: &Value,
) -> SchemaResult<String> {
    match (column_type, value) {
        (ColumnType::Boolean, value) => {
            Ok(format!("DEFAULT {}", if is_truthy(value) { 1 } else { 0 }))
        }
        (_, Value::Null) if rule.is_nullable() => Ok("DEFAULT NULL".to_string()),
        (_, Value::Null) => Err(SchemaError::malformed_field(
            &model.name,
            name,
            "null default on a column that does not accept null",
        )),
        (_, value) => Ok(format!("DEFAULT '{}'", literal_text(value).replace('\'', "''"))),
    }
}

/// Plain-text form of a default literal.
///
/// Numbers drop a trailing `.0` and arrays render as their items joined by
/// commas (`[1, 2]` → `1,2`); objects keep their JSON text.
fn literal_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => f.to_string(),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(literal_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Loose truthiness used for boolean defaults given as non-booleans
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// ============================================================================
// Tests
// ============================================================================
