//! Model descriptors
//!
//! A `ModelDescriptor` is the schema-level description of one entity type as
//! handed over by the model layer: its table, primary key, field rules and
//! relations. Translators only ever borrow it.

use crate::ordered::OrderedMap;
use crate::relation::RelationDescriptor;
use crate::rule::FieldRule;
use modelddl_core::{SchemaError, SchemaResult, Validatable};
use serde::{Deserialize, Serialize};

// ============================================================================
// ModelDescriptor
// ============================================================================

/// Read-only description of one entity type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Model name (e.g., "User")
    pub name: String,

    /// Target table name (e.g., "users")
    pub table: String,

    /// Name of the primary-key field
    #[serde(default = "default_id_key")]
    pub id_key: String,

    /// Field rules in declaration order
    pub validation_rules: OrderedMap<FieldRule>,

    /// Relations by name, in declaration order
    #[serde(default)]
    pub available_relations: OrderedMap<RelationDescriptor>,
}

fn default_id_key() -> String {
    "id".to_string()
}

impl ModelDescriptor {
    /// Create a model with no fields and an `id` primary key
    pub fn new(name: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            id_key: default_id_key(),
            validation_rules: OrderedMap::new(),
            available_relations: OrderedMap::new(),
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Set the primary-key field name
    pub fn with_id_key(mut self, id_key: impl Into<String>) -> Self {
        self.id_key = id_key.into();
        self
    }

    /// Append a field rule
    pub fn with_field(mut self, name: impl Into<String>, rule: FieldRule) -> Self {
        self.validation_rules.insert(name, rule);
        self
    }

    /// Append a relation
    pub fn with_relation(mut self, name: impl Into<String>, relation: RelationDescriptor) -> Self {
        self.available_relations.insert(name, relation);
        self
    }

    // ========================================================================
    // Query methods
    // ========================================================================

    /// Whether `field` is the primary key
    pub fn is_id_key(&self, field: &str) -> bool {
        self.id_key == field
    }

    /// Iterate fields in declaration order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.validation_rules.iter()
    }

    pub fn relations(&self) -> impl Iterator<Item = (&str, &RelationDescriptor)> {
        self.available_relations.iter()
    }
}

impl Validatable for ModelDescriptor {
    fn validate(&self) -> SchemaResult<()> {
        if self.validation_rules.is_empty() {
            return Err(SchemaError::EmptyModel(self.name.clone()));
        }

        for (field, rule) in self.fields() {
            rule.validate()
                .map_err(|e| SchemaError::malformed_field(&self.name, field, e.to_string()))?;
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
