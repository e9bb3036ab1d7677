//! Relation-derived indexes
//!
//! Each relation points at one or two foreign-key columns that are worth
//! indexing. Targets are collected into an [`IndexSet`] shared across a whole
//! batch, so a column referenced from several models is indexed once.

use modelddl_core::{SchemaError, SchemaResult};
use modelddl_ir::{ModelDescriptor, RelationDescriptor, RelationMode};
use std::collections::HashSet;

/// A `(table, column)` pair to index
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexTarget {
    pub table: String,
    pub column: String,
}

impl IndexTarget {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Index name: `index_<table>__<column>`
    pub fn index_name(&self) -> String {
        format!("index_{}__{}", self.table, self.column)
    }

    pub fn to_sql(&self) -> String {
        format!(
            "CREATE INDEX {} ON {} ({});",
            self.index_name(),
            self.table,
            self.column
        )
    }
}

/// Deduplicated index targets in first-seen order
#[derive(Debug, Clone, Default)]
pub struct IndexSet {
    order: Vec<IndexTarget>,
    seen: HashSet<IndexTarget>,
}

impl IndexSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a target; returns `false` when it was already present
    pub fn insert(&mut self, target: IndexTarget) -> bool {
        if self.seen.contains(&target) {
            return false;
        }
        self.seen.insert(target.clone());
        self.order.push(target);
        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndexTarget> {
        self.order.iter()
    }

    /// One `CREATE INDEX` statement per target
    pub fn to_sql(&self) -> Vec<String> {
        self.order.iter().map(IndexTarget::to_sql).collect()
    }
}

/// Add the index targets implied by `model`'s relations to `indexes`
pub fn collect_indexes(model: &ModelDescriptor, indexes: &mut IndexSet) -> SchemaResult<()> {
    for (name, relation) in model.relations() {
        for target in relation_targets(model, name, relation)? {
            if !indexes.insert(target) {
                tracing::trace!(model = %model.name, relation = name, "index target already collected");
            }
        }
    }
    Ok(())
}

fn relation_targets(
    model: &ModelDescriptor,
    name: &str,
    relation: &RelationDescriptor,
) -> SchemaResult<Vec<IndexTarget>> {
    let targets = match relation.mode {
        RelationMode::Child | RelationMode::Children => {
            vec![IndexTarget::new(&relation.b.table, &relation.b_key)]
        }
        RelationMode::Parent => vec![IndexTarget::new(&relation.a.table, &relation.a_key)],
        RelationMode::Through => {
            let via = relation.class_via.as_ref().ok_or_else(|| {
                SchemaError::malformed_relation(&model.name, name, "junction model (class_via) is missing")
            })?;
            let via_a_key = relation.via_a_key.as_ref().ok_or_else(|| {
                SchemaError::malformed_relation(&model.name, name, "junction key (via_a_key) is missing")
            })?;
            vec![
                IndexTarget::new(&via.table, via_a_key),
                IndexTarget::new(&relation.b.table, &relation.b_key),
            ]
        }
    };
    Ok(targets)
}
