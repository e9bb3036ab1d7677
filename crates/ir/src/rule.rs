//! Field rules
//!
//! A `FieldRule` is the validation record the model layer keeps for one
//! field: its logical type tags, optional numeric bounds and optional default.
//! Translators derive the column definition entirely from it.

use modelddl_core::{LogicalType, SchemaError, SchemaResult, TypeSet, Validatable};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// FieldRule
// ============================================================================

/// Domain constraints of a single field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Logical type tags, in declaration order
    #[serde(rename = "type")]
    pub types: TypeSet,

    /// Numeric lower bound (minimum length for strings)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Numeric upper bound (maximum length for strings)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Literal default value.
    ///
    /// An explicit `"default": null` is kept as `Some(Value::Null)` so it can
    /// be told apart from an absent default.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Value>,
}

/// Maps a present key to `Some`, even when its value is `null`
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl FieldRule {
    /// Create a rule with the given type tags and no bounds
    pub fn new(types: impl Into<TypeSet>) -> Self {
        Self {
            types: types.into(),
            min: None,
            max: None,
            default: None,
        }
    }

    pub fn boolean() -> Self {
        Self::new(LogicalType::Boolean)
    }

    pub fn integer() -> Self {
        Self::new(LogicalType::Integer)
    }

    pub fn string() -> Self {
        Self::new(LogicalType::String)
    }

    pub fn number() -> Self {
        Self::new(LogicalType::Number)
    }

    pub fn object() -> Self {
        Self::new(LogicalType::Object)
    }

    pub fn array() -> Self {
        Self::new(LogicalType::Array)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Also admit `null`
    pub fn nullable(mut self) -> Self {
        self.types = self.types.nullable();
        self
    }

    /// Set the lower bound
    pub fn with_min(mut self, min: impl Into<f64>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Set the upper bound
    pub fn with_max(mut self, max: impl Into<f64>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Set the default literal
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    // ========================================================================
    // Query methods
    // ========================================================================

    /// A rule is unsigned when it declares a non-negative lower bound
    pub fn is_unsigned(&self) -> bool {
        matches!(self.min, Some(min) if min >= 0.0)
    }

    pub fn is_nullable(&self) -> bool {
        self.types.is_nullable()
    }

    pub fn has_type(&self, t: LogicalType) -> bool {
        self.types.contains(t)
    }

    /// Whether `min` and `max` are both declared and equal
    pub fn is_fixed_length(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min == max)
    }
}

impl Validatable for FieldRule {
    fn validate(&self) -> SchemaResult<()> {
        if self.types.is_empty() {
            return Err(SchemaError::InvalidSchemaFormat(
                "field rule declares an empty type list".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
